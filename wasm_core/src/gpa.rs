//! Credit-weighted GPA on a 4.0 scale.

use serde::{Deserialize, Serialize};

const GRADE_POINTS: &[(&str, f64)] = &[
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub credits: f64,
    pub grade: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Semester {
    pub name: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SemesterGpa {
    pub name: String,
    pub credits: f64,
    pub gpa: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GpaSummary {
    pub semesters: Vec<SemesterGpa>,
    pub total_credits: f64,
    pub cumulative: String,
}

/// Points for a letter grade; unknown grades count as zero.
pub fn grade_points(grade: &str) -> f64 {
    let grade = grade.trim();
    GRADE_POINTS
        .iter()
        .find(|(letter, _)| letter.eq_ignore_ascii_case(grade))
        .map(|&(_, points)| points)
        .unwrap_or(0.0)
}

#[derive(Default, Clone, Copy)]
struct Tally {
    points: f64,
    credits: f64,
}

impl Tally {
    fn add(&mut self, course: &Course) {
        // Negative or non-finite credits count as zero.
        let credits = if course.credits.is_finite() {
            course.credits.max(0.0)
        } else {
            0.0
        };
        self.points += grade_points(&course.grade) * credits;
        self.credits += credits;
    }

    fn average(self) -> f64 {
        if self.credits > 0.0 {
            self.points / self.credits
        } else {
            0.0
        }
    }
}

pub fn summarize(semesters: &[Semester]) -> GpaSummary {
    let mut overall = Tally::default();
    let semesters = semesters
        .iter()
        .map(|semester| {
            let mut tally = Tally::default();
            for course in &semester.courses {
                tally.add(course);
                overall.add(course);
            }
            SemesterGpa {
                name: semester.name.clone(),
                credits: tally.credits,
                gpa: format!("{:.2}", tally.average()),
            }
        })
        .collect();
    GpaSummary {
        semesters,
        total_credits: overall.credits,
        cumulative: format!("{:.2}", overall.average()),
    }
}
