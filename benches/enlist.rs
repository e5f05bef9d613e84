//! This bench simulates a registrant enlisting a full load of sections and
//! requesting an assessment.

#![allow(missing_docs)]

use std::num::NonZeroU32;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use enlistment::{Days, DegreeProgram, Period, Room, Schedule, Section, Student, Subject};
use non_empty_string::NonEmptyString;

const SLOTS: [(u16, u16); 6] = [
    (830, 900),
    (900, 930),
    (930, 1000),
    (1000, 1030),
    (1030, 1100),
    (1100, 1130),
];

/// Builds one section per (day pattern, slot) pair, each offering a
/// distinct one-unit subject, and a program containing all of them.
fn catalog() -> (DegreeProgram, Vec<Section>) {
    let days = [Days::Mth, Days::Tf, Days::Ws];
    let mut subjects = Vec::new();
    let mut sections = Vec::new();

    for (day_index, day) in days.into_iter().enumerate() {
        for (slot_index, (start, end)) in SLOTS.into_iter().enumerate() {
            let index = day_index * SLOTS.len() + slot_index;
            let subject = Subject::new(format!("SUBJ{index}").parse().unwrap(), 1);
            subjects.push(subject.clone());
            sections.push(Section::new(
                format!("S{index}").parse().unwrap(),
                Schedule::new(day, Period::new(start, end).unwrap()),
                Room::new(format!("R{index}").parse().unwrap(), u32::MAX),
                subject,
            ));
        }
    }

    let program = DegreeProgram::new(
        NonEmptyString::new("CCS".to_string()).unwrap(),
        subjects,
    );
    (program, sections)
}

fn enlist_full_load(c: &mut Criterion) {
    c.bench_function("enlist full load and assess", |b| {
        b.iter_batched(
            || {
                let (program, sections) = catalog();
                let student = Student::new(NonZeroU32::new(1).unwrap(), program);
                (student, sections)
            },
            |(mut student, sections)| {
                for section in &sections {
                    student.enlist(section).unwrap();
                }
                student.request_assessment()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, enlist_full_load);
criterion_main!(benches);
