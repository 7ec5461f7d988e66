// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates the class/subject text of an allocation.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the text is empty or whitespace.
pub fn validate_class_subject(class_subject: &str) -> Result<(), DomainError> {
    if class_subject.trim().is_empty() {
        return Err(DomainError::MissingField("class_subject"));
    }
    Ok(())
}

/// Validates a department key.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the department is empty or whitespace.
pub fn validate_department(department: &str) -> Result<(), DomainError> {
    if department.trim().is_empty() {
        return Err(DomainError::MissingField("department"));
    }
    Ok(())
}
