//! Admission form fields

use crate::api::AdmissionPayload;

/// The three inputs of the admission form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    FatherName,
    ClassGrade,
}

impl FieldName {
    /// All fields in focus order
    pub const ALL: [FieldName; 3] = [
        FieldName::FullName,
        FieldName::FatherName,
        FieldName::ClassGrade,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Student Name",
            Self::FatherName => "Father Name",
            Self::ClassGrade => "Class",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter student's full name",
            Self::FatherName => "Enter father's name",
            Self::ClassGrade => "e.g., 5th Grade, Class 10",
        }
    }
}

/// Current values of the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdmissionFields {
    pub full_name: String,
    pub father_name: String,
    pub class_grade: String,
}

impl AdmissionFields {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::FullName => &self.full_name,
            FieldName::FatherName => &self.father_name,
            FieldName::ClassGrade => &self.class_grade,
        }
    }

    fn get_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::FullName => &mut self.full_name,
            FieldName::FatherName => &mut self.father_name,
            FieldName::ClassGrade => &mut self.class_grade,
        }
    }

    /// Replace a field's value
    pub fn set(&mut self, name: FieldName, value: String) {
        *self.get_mut(name) = value;
    }

    /// Append a character to a field
    pub fn push_char(&mut self, name: FieldName, c: char) {
        self.get_mut(name).push(c);
    }

    /// Remove the last character from a field
    pub fn pop_char(&mut self, name: FieldName) {
        self.get_mut(name).pop();
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        for name in FieldName::ALL {
            self.get_mut(name).clear();
        }
    }

    /// First field (in display order) that is still empty
    pub fn first_missing(&self) -> Option<FieldName> {
        FieldName::ALL
            .into_iter()
            .find(|name| self.get(*name).is_empty())
    }

    pub fn to_payload(&self) -> AdmissionPayload {
        AdmissionPayload {
            full_name: self.full_name.clone(),
            father_name: self.father_name.clone(),
            class_grade: self.class_grade.clone(),
        }
    }
}

#[cfg(test)]
impl AdmissionFields {
    pub fn new(
        full_name: impl Into<String>,
        father_name: impl Into<String>,
        class_grade: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            father_name: father_name.into(),
            class_grade: class_grade.into(),
        }
    }
}
