//! Administrative directory domain services.
//!
//! Implements the driving ports administrators use to provision, amend,
//! remove, and search patients, doctors, and departments.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    DepartmentRepository, DirectoryCommand, DirectoryQuery, DoctorRecord, DoctorRepository,
    NewDoctorAccount, NewPatientAccount, PasswordHasher, PatientRecord, PatientRepository,
};
use crate::domain::service_support::{
    map_department_error, map_doctor_error, map_hasher_error, map_patient_error,
};
use crate::domain::{
    Department, DepartmentId, DepartmentUpdate, Doctor, DoctorId, DoctorUpdate, Error,
    NewDepartment, Patient, PatientId, PatientUpdate,
};

fn patient_not_found(id: PatientId) -> Error {
    Error::not_found(format!("patient {id} not found"))
}

fn doctor_not_found(id: DoctorId) -> Error {
    Error::not_found(format!("doctor {id} not found"))
}

fn department_not_found(id: DepartmentId) -> Error {
    Error::not_found(format!("department {id} not found"))
}

/// Directory service implementing the administrative driving ports.
#[derive(Clone)]
pub struct DirectoryService<P, D, T, H> {
    patients: Arc<P>,
    doctors: Arc<D>,
    departments: Arc<T>,
    hasher: Arc<H>,
}

impl<P, D, T, H> DirectoryService<P, D, T, H> {
    /// Create a new service over the directory repositories and the hasher.
    pub fn new(patients: Arc<P>, doctors: Arc<D>, departments: Arc<T>, hasher: Arc<H>) -> Self {
        Self {
            patients,
            doctors,
            departments,
            hasher,
        }
    }
}

#[async_trait]
impl<P, D, T, H> DirectoryCommand for DirectoryService<P, D, T, H>
where
    P: PatientRepository,
    D: DoctorRepository,
    T: DepartmentRepository,
    H: PasswordHasher,
{
    async fn create_patient(&self, account: NewPatientAccount) -> Result<PatientId, Error> {
        let hash = self
            .hasher
            .hash(account.password.as_str())
            .map_err(map_hasher_error)?;

        self.patients
            .create_with_account(&account.email, &hash, &account.profile)
            .await
            .map_err(map_patient_error)
    }

    async fn update_patient(
        &self,
        id: PatientId,
        update: PatientUpdate,
    ) -> Result<Patient, Error> {
        if update.is_empty() {
            return Err(Error::invalid_request("no data provided"));
        }

        self.patients
            .update(id, &update)
            .await
            .map_err(map_patient_error)?
            .ok_or_else(|| patient_not_found(id))
    }

    async fn delete_patient(&self, id: PatientId) -> Result<(), Error> {
        let deleted = self.patients.delete(id).await.map_err(map_patient_error)?;
        if deleted { Ok(()) } else { Err(patient_not_found(id)) }
    }

    async fn create_doctor(&self, account: NewDoctorAccount) -> Result<DoctorId, Error> {
        let hash = self
            .hasher
            .hash(account.password.as_str())
            .map_err(map_hasher_error)?;

        self.doctors
            .create_with_account(&account.email, &hash, &account.profile)
            .await
            .map_err(map_doctor_error)
    }

    async fn update_doctor(&self, id: DoctorId, update: DoctorUpdate) -> Result<Doctor, Error> {
        if update.is_empty() {
            return Err(Error::invalid_request("no data provided"));
        }

        self.doctors
            .update(id, &update)
            .await
            .map_err(map_doctor_error)?
            .ok_or_else(|| doctor_not_found(id))
    }

    async fn delete_doctor(&self, id: DoctorId) -> Result<(), Error> {
        let deleted = self.doctors.delete(id).await.map_err(map_doctor_error)?;
        if deleted { Ok(()) } else { Err(doctor_not_found(id)) }
    }

    async fn create_department(&self, department: NewDepartment) -> Result<DepartmentId, Error> {
        self.departments
            .create(&department)
            .await
            .map_err(map_department_error)
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<Department, Error> {
        if update.is_empty() {
            return Err(Error::invalid_request("no data provided"));
        }

        self.departments
            .update(id, &update)
            .await
            .map_err(map_department_error)?
            .ok_or_else(|| department_not_found(id))
    }

    async fn delete_department(&self, id: DepartmentId) -> Result<(), Error> {
        let deleted = self
            .departments
            .delete(id)
            .await
            .map_err(map_department_error)?;
        if deleted { Ok(()) } else { Err(department_not_found(id)) }
    }
}

#[async_trait]
impl<P, D, T, H> DirectoryQuery for DirectoryService<P, D, T, H>
where
    P: PatientRepository,
    D: DoctorRepository,
    T: DepartmentRepository,
    H: PasswordHasher,
{
    async fn patient(&self, id: PatientId) -> Result<PatientRecord, Error> {
        self.patients
            .find(id)
            .await
            .map_err(map_patient_error)?
            .ok_or_else(|| patient_not_found(id))
    }

    async fn doctor(&self, id: DoctorId) -> Result<DoctorRecord, Error> {
        self.doctors
            .find(id)
            .await
            .map_err(map_doctor_error)?
            .ok_or_else(|| doctor_not_found(id))
    }

    async fn department(&self, id: DepartmentId) -> Result<Department, Error> {
        self.departments
            .find(id)
            .await
            .map_err(map_department_error)?
            .ok_or_else(|| department_not_found(id))
    }

    // An empty term degenerates to an unanchored pattern, so it lists every
    // row. Searches therefore pass through unfiltered.
    async fn search_patients(&self, term: &str) -> Result<Vec<PatientRecord>, Error> {
        self.patients.search(term).await.map_err(map_patient_error)
    }

    async fn search_doctors(&self, term: &str) -> Result<Vec<DoctorRecord>, Error> {
        self.doctors.search(term).await.map_err(map_doctor_error)
    }

    async fn search_departments(&self, term: &str) -> Result<Vec<Department>, Error> {
        self.departments
            .search(term)
            .await
            .map_err(map_department_error)
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
