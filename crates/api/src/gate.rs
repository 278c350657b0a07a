//! # Session/Credential Gate
//!
//! Resolves submitted credentials (registration or login forms) to a
//! role-tagged [`Identity`], or a validation error. Uniqueness is enforced
//! here, before the store insert. The store shim itself is append-only
//! and checks nothing.

use academy_core::errors::{AcademyError, AcademyResult};
use academy_core::models::identity::{Admin, Identity, Student};
use academy_store::EntityStore;
use serde::Deserialize;

/// The single admin credential pair. The admin is a synthetic identity,
/// never stored as a record.
pub const ADMIN_USERNAME: &str = "noor";
pub const ADMIN_PASSWORD: &str = "noor123";

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub qualification: String,
    pub location: String,
    pub age: u32,
    /// Fee payment proof as a base64 data URL.
    pub fee_screenshot: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffLoginRequest {
    pub username: String,
    pub password: String,
}

/// Registers a new student.
///
/// Every profile field plus the fee screenshot must be present; the email
/// must not collide (case-insensitively) with an existing student. On
/// success the freshly constructed record is the authenticated identity;
/// there is no confirming re-read of the store.
pub async fn register_student(
    store: &dyn EntityStore,
    request: RegisterRequest,
) -> AcademyResult<Identity> {
    let name = request.name.trim();
    let email = request.email.trim();
    let phone_number = request.phone_number.trim();
    let fee_screenshot = request
        .fee_screenshot
        .as_deref()
        .filter(|s| !s.is_empty());

    let complete = !name.is_empty()
        && !email.is_empty()
        && !phone_number.is_empty()
        && !request.qualification.trim().is_empty()
        && !request.location.trim().is_empty()
        && request.age > 0
        && fee_screenshot.is_some();
    if !complete {
        return Err(AcademyError::Validation(
            "Please fill in all fields and upload the fee screenshot.".to_string(),
        ));
    }

    let existing = store.list_students().await?;
    if existing.iter().any(|s| s.email_matches(email)) {
        return Err(AcademyError::DuplicateAccount(
            "An account with this email already exists. Please login instead.".to_string(),
        ));
    }

    let student = Student {
        name: name.to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        qualification: request.qualification.clone(),
        location: request.location.clone(),
        age: request.age,
        fee_screenshot: fee_screenshot.map(str::to_string),
    };

    store.insert_student(&student).await?;
    Ok(Identity::Student(student))
}

/// Logs a student in by email alone, matched case-insensitively.
pub async fn login_student(store: &dyn EntityStore, email: &str) -> AcademyResult<Identity> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AcademyError::Validation(
            "Please enter your email to login.".to_string(),
        ));
    }

    let students = store.list_students().await?;
    students
        .into_iter()
        .find(|s| s.email_matches(email))
        .map(Identity::Student)
        .ok_or_else(|| AcademyError::AccountNotFound(email.to_string()))
}

/// Resolves a staff login.
///
/// The hardcoded admin pair short-circuits to the synthetic admin
/// identity. Otherwise the faculty collection is searched for an entry
/// whose username or display name equals the submitted username and whose
/// password matches exactly. The username-or-name widening is existing
/// product behavior, kept as-is.
pub async fn staff_login(
    store: &dyn EntityStore,
    username: &str,
    password: &str,
) -> AcademyResult<Identity> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        return Ok(Identity::Admin(Admin::default()));
    }

    let faculty = store.list_faculty().await?;
    faculty
        .into_iter()
        .find(|f| (f.username == username || f.name == username) && f.password == password)
        .map(Identity::Faculty)
        .ok_or(AcademyError::InvalidCredentials)
}
