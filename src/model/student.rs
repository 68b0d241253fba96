//! Student record and its add/edit form body.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub mobile: String,
}

/// Add/edit form body. All four keys must be present; a missing key fails extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub course: String,
    pub mobile: String,
}

impl StudentForm {
    /// Surrounding whitespace dropped from the free-text fields. `mobile` is kept verbatim so
    /// padded numbers still fail validation.
    pub fn trimmed(&self) -> StudentForm {
        StudentForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            course: self.course.trim().to_string(),
            mobile: self.mobile.clone(),
        }
    }
}

impl From<Student> for StudentForm {
    fn from(s: Student) -> Self {
        StudentForm {
            name: s.name,
            email: s.email,
            course: s.course,
            mobile: s.mobile,
        }
    }
}
