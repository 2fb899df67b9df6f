//! Tests for the administrative directory service.

use std::sync::Arc;

use uuid::Uuid;
use zeroize::Zeroizing;

use super::*;
use crate::domain::ports::{
    MockDepartmentRepository, MockDoctorRepository, MockPasswordHasher, MockPatientRepository,
    PatientPersistenceError,
};
use crate::domain::{
    ContactNumber, EmailAddress, ErrorCode, Gender, NewDoctorProfile, NewPatientProfile,
    PatientAge, UserId,
};

type Service = DirectoryService<
    MockPatientRepository,
    MockDoctorRepository,
    MockDepartmentRepository,
    MockPasswordHasher,
>;

struct Mocks {
    patients: MockPatientRepository,
    doctors: MockDoctorRepository,
    departments: MockDepartmentRepository,
    hasher: MockPasswordHasher,
}

impl Mocks {
    fn new() -> Self {
        Self {
            patients: MockPatientRepository::new(),
            doctors: MockDoctorRepository::new(),
            departments: MockDepartmentRepository::new(),
            hasher: MockPasswordHasher::new(),
        }
    }

    fn into_service(self) -> Service {
        DirectoryService::new(
            Arc::new(self.patients),
            Arc::new(self.doctors),
            Arc::new(self.departments),
            Arc::new(self.hasher),
        )
    }
}

fn patient_account(email: &str) -> NewPatientAccount {
    NewPatientAccount {
        email: EmailAddress::new(email).expect("valid email"),
        password: Zeroizing::new("pw".to_owned()),
        profile: NewPatientProfile {
            name: "Asha Rao".to_owned(),
            age: Some(PatientAge::new(34).expect("valid age")),
            gender: Some(Gender::Female),
            contact: ContactNumber::new("0401234567").expect("valid contact"),
            address: "12 Harbour Lane".to_owned(),
        },
    }
}

fn doctor_account(email: &str) -> NewDoctorAccount {
    NewDoctorAccount {
        email: EmailAddress::new(email).expect("valid email"),
        password: Zeroizing::new("pw".to_owned()),
        profile: NewDoctorProfile {
            name: "Dr Imran Shah".to_owned(),
            specialization: "Cardiology".to_owned(),
            contact: "0407654321".to_owned(),
        },
    }
}

fn sample_patient_record(id: PatientId) -> PatientRecord {
    PatientRecord {
        patient: Patient::new(
            id,
            UserId::random(),
            "Asha Rao",
            Some(PatientAge::new(34).expect("valid age")),
            Some(Gender::Female),
            ContactNumber::new("0401234567").expect("valid contact"),
            "12 Harbour Lane",
        ),
        email: EmailAddress::new("asha@ward.example").expect("valid email"),
    }
}

#[tokio::test]
async fn create_patient_hashes_before_storing() {
    let id = PatientId::from_uuid(Uuid::new_v4());
    let mut mocks = Mocks::new();
    mocks
        .hasher
        .expect_hash()
        .withf(|password| password == "pw")
        .times(1)
        .return_once(|_| Ok("argon-hash".to_owned()));
    mocks
        .patients
        .expect_create_with_account()
        .withf(|email, hash, profile| {
            email.as_ref() == "asha@ward.example"
                && hash == "argon-hash"
                && profile.name == "Asha Rao"
        })
        .times(1)
        .return_once(move |_, _, _| Ok(id));

    let service = mocks.into_service();
    let created = service
        .create_patient(patient_account("asha@ward.example"))
        .await
        .expect("creation succeeds");

    assert_eq!(created, id);
}

#[tokio::test]
async fn create_patient_maps_duplicate_email_to_conflict() {
    let mut mocks = Mocks::new();
    mocks
        .hasher
        .expect_hash()
        .times(1)
        .return_once(|_| Ok("argon-hash".to_owned()));
    mocks
        .patients
        .expect_create_with_account()
        .times(1)
        .return_once(|_, _, _| Err(PatientPersistenceError::duplicate_email()));

    let service = mocks.into_service();
    let error = service
        .create_patient(patient_account("taken@ward.example"))
        .await
        .expect_err("duplicate email must conflict");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn create_doctor_hashes_before_storing() {
    let id = DoctorId::from_uuid(Uuid::new_v4());
    let mut mocks = Mocks::new();
    mocks
        .hasher
        .expect_hash()
        .times(1)
        .return_once(|_| Ok("argon-hash".to_owned()));
    mocks
        .doctors
        .expect_create_with_account()
        .withf(|email, hash, profile| {
            email.as_ref() == "imran@ward.example"
                && hash == "argon-hash"
                && profile.specialization == "Cardiology"
        })
        .times(1)
        .return_once(move |_, _, _| Ok(id));

    let service = mocks.into_service();
    let created = service
        .create_doctor(doctor_account("imran@ward.example"))
        .await
        .expect("creation succeeds");

    assert_eq!(created, id);
}

#[tokio::test]
async fn update_patient_rejects_empty_payload() {
    let mut mocks = Mocks::new();
    mocks.patients.expect_update().times(0);

    let service = mocks.into_service();
    let error = service
        .update_patient(PatientId::from_uuid(Uuid::new_v4()), PatientUpdate::default())
        .await
        .expect_err("empty update must fail");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn update_patient_for_unknown_id_is_not_found() {
    let mut mocks = Mocks::new();
    mocks
        .patients
        .expect_update()
        .times(1)
        .return_once(|_, _| Ok(None));

    let update = PatientUpdate {
        name: Some("Renamed".to_owned()),
        ..PatientUpdate::default()
    };
    let service = mocks.into_service();
    let error = service
        .update_patient(PatientId::from_uuid(Uuid::new_v4()), update)
        .await
        .expect_err("unknown id must 404");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_doctor_maps_missing_row_to_not_found() {
    let mut mocks = Mocks::new();
    mocks.doctors.expect_delete().times(1).return_once(|_| Ok(false));

    let service = mocks.into_service();
    let error = service
        .delete_doctor(DoctorId::from_uuid(Uuid::new_v4()))
        .await
        .expect_err("missing row must 404");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_patient_succeeds_when_row_removed() {
    let mut mocks = Mocks::new();
    mocks.patients.expect_delete().times(1).return_once(|_| Ok(true));

    let service = mocks.into_service();
    service
        .delete_patient(PatientId::from_uuid(Uuid::new_v4()))
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn patient_lookup_returns_joined_record() {
    let id = PatientId::from_uuid(Uuid::new_v4());
    let record = sample_patient_record(id);
    let expected = record.clone();

    let mut mocks = Mocks::new();
    mocks
        .patients
        .expect_find()
        .times(1)
        .return_once(move |_| Ok(Some(record)));

    let service = mocks.into_service();
    let found = service.patient(id).await.expect("lookup succeeds");

    assert_eq!(found, expected);
    assert_eq!(found.email.as_ref(), "asha@ward.example");
}

#[tokio::test]
async fn patient_lookup_for_unknown_id_is_not_found() {
    let mut mocks = Mocks::new();
    mocks.patients.expect_find().times(1).return_once(|_| Ok(None));

    let service = mocks.into_service();
    let error = service
        .patient(PatientId::from_uuid(Uuid::new_v4()))
        .await
        .expect_err("unknown id must 404");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn empty_search_term_still_reaches_the_repository() {
    let id = PatientId::from_uuid(Uuid::new_v4());
    let record = sample_patient_record(id);

    let mut mocks = Mocks::new();
    mocks
        .patients
        .expect_search()
        .withf(|term| term.is_empty())
        .times(1)
        .return_once(move |_| Ok(vec![record]));

    let service = mocks.into_service();
    let results = service.search_patients("").await.expect("search succeeds");

    assert_eq!(results.len(), 1, "an empty term lists every row");
}

#[tokio::test]
async fn search_passes_the_term_through() {
    let id = PatientId::from_uuid(Uuid::new_v4());
    let record = sample_patient_record(id);

    let mut mocks = Mocks::new();
    mocks
        .patients
        .expect_search()
        .withf(|term| term == "rao")
        .times(1)
        .return_once(move |_| Ok(vec![record]));

    let service = mocks.into_service();
    let results = service.search_patients("rao").await.expect("search succeeds");

    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn department_round_trip_through_the_service() {
    let id = DepartmentId::from_uuid(Uuid::new_v4());
    let mut mocks = Mocks::new();
    mocks
        .departments
        .expect_create()
        .withf(|department| department.name == "Radiology")
        .times(1)
        .return_once(move |_| Ok(id));
    mocks
        .departments
        .expect_find()
        .times(1)
        .return_once(move |_| Ok(Some(Department::new(id, "Radiology", None))));

    let service = mocks.into_service();
    let created = service
        .create_department(NewDepartment {
            name: "Radiology".to_owned(),
            description: None,
        })
        .await
        .expect("creation succeeds");
    let fetched = service.department(created).await.expect("lookup succeeds");

    assert_eq!(fetched.name(), "Radiology");
}

#[tokio::test]
async fn update_department_for_unknown_id_is_not_found() {
    let mut mocks = Mocks::new();
    mocks
        .departments
        .expect_update()
        .times(1)
        .return_once(|_, _| Ok(None));

    let update = DepartmentUpdate {
        description: Some("Imaging and scans".to_owned()),
        ..DepartmentUpdate::default()
    };
    let service = mocks.into_service();
    let error = service
        .update_department(DepartmentId::from_uuid(Uuid::new_v4()), update)
        .await
        .expect_err("unknown id must 404");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
