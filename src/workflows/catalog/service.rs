use std::sync::Arc;

use super::domain::{Course, CourseDraft, Instructor, InstructorDraft};
use crate::persistence::RecordStore;
use crate::store::WorkingSet;
use crate::workflows::{ensure_unique_name, WorkflowError};

/// Courses and instructors plus the consistency rules between them.
pub struct CatalogService<C, I> {
    course_store: Arc<C>,
    instructor_store: Arc<I>,
    courses: Arc<WorkingSet<Course>>,
    instructors: Arc<WorkingSet<Instructor>>,
}

impl<C, I> CatalogService<C, I>
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    pub fn new(
        course_store: Arc<C>,
        instructor_store: Arc<I>,
        courses: Arc<WorkingSet<Course>>,
        instructors: Arc<WorkingSet<Instructor>>,
    ) -> Self {
        Self {
            course_store,
            instructor_store,
            courses,
            instructors,
        }
    }

    pub fn refresh(&self) -> Result<(usize, usize), WorkflowError> {
        let courses = self.course_store.list()?;
        let instructors = self.instructor_store.list()?;
        let counts = (courses.len(), instructors.len());
        self.courses.replace_all(courses);
        self.instructors.replace_all(instructors);
        Ok(counts)
    }

    pub fn courses(&self) -> Vec<Course> {
        self.courses.snapshot()
    }

    pub fn instructors(&self) -> Vec<Instructor> {
        self.instructors.snapshot()
    }

    pub fn add_course(&self, draft: CourseDraft) -> Result<Course, WorkflowError> {
        self.ensure_course_name_free(&draft.ten_khoa_hoc, None)?;
        self.ensure_instructor_known(&draft.giang_vien)?;
        let created = self.course_store.create(draft.into_course())?;
        self.courses.upsert(created.clone());
        Ok(created)
    }

    pub fn update_course(&self, record: Course) -> Result<Course, WorkflowError> {
        if self.courses.find(&record.id).is_none() {
            return Err(WorkflowError::NotFound(record.id));
        }
        self.ensure_course_name_free(&record.ten_khoa_hoc, Some(&record.id))?;
        self.ensure_instructor_known(&record.giang_vien)?;
        self.course_store.update(&record)?;
        self.courses.upsert(record.clone());
        Ok(record)
    }

    /// A course with enrolled students cannot be deleted.
    pub fn delete_course(&self, id: &str) -> Result<(), WorkflowError> {
        let course = self
            .courses
            .find(id)
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))?;
        if course.so_luong_hoc_vien > 0 {
            return Err(WorkflowError::ReferentialConstraint(format!(
                "course {} still has {} enrolled students",
                course.ten_khoa_hoc, course.so_luong_hoc_vien
            )));
        }
        self.course_store.delete(id)?;
        self.courses.remove(id);
        Ok(())
    }

    pub fn add_instructor(&self, draft: InstructorDraft) -> Result<Instructor, WorkflowError> {
        self.ensure_instructor_name_free(&draft.ten_giang_vien, None)?;
        let created = self.instructor_store.create(draft.into_instructor())?;
        self.instructors.upsert(created.clone());
        Ok(created)
    }

    /// Renames propagate: every course carrying the previous name is
    /// rewritten to the new one. Courses are persisted first, then the
    /// roster; the pair is not atomic, matching the original write order.
    pub fn update_instructor(&self, record: Instructor) -> Result<Instructor, WorkflowError> {
        let previous = self
            .instructors
            .find(&record.id)
            .ok_or_else(|| WorkflowError::NotFound(record.id.clone()))?;
        self.ensure_instructor_name_free(&record.ten_giang_vien, Some(&record.id))?;

        if previous.ten_giang_vien != record.ten_giang_vien {
            let referencing: Vec<Course> = self
                .courses
                .snapshot()
                .into_iter()
                .filter(|course| course.giang_vien == previous.ten_giang_vien)
                .collect();
            for mut course in referencing {
                course.giang_vien = record.ten_giang_vien.clone();
                self.course_store.update(&course)?;
                self.courses.upsert(course);
            }
            tracing::debug!(
                instructor = %record.id,
                from = %previous.ten_giang_vien,
                to = %record.ten_giang_vien,
                "propagated instructor rename to referencing courses"
            );
        }

        self.instructor_store.update(&record)?;
        self.instructors.upsert(record.clone());
        Ok(record)
    }

    /// An instructor still teaching a course cannot be deleted.
    pub fn delete_instructor(&self, id: &str) -> Result<(), WorkflowError> {
        let instructor = self
            .instructors
            .find(id)
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))?;
        let teaching = self
            .courses
            .snapshot()
            .iter()
            .any(|course| course.giang_vien == instructor.ten_giang_vien);
        if teaching {
            return Err(WorkflowError::ReferentialConstraint(format!(
                "instructor {} still teaches at least one course",
                instructor.ten_giang_vien
            )));
        }
        self.instructor_store.delete(id)?;
        self.instructors.remove(id);
        Ok(())
    }

    fn ensure_course_name_free(
        &self,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<(), WorkflowError> {
        let existing = self.courses.snapshot();
        ensure_unique_name(
            "course",
            name,
            exclude_id,
            existing
                .iter()
                .map(|course| (course.id.as_str(), course.ten_khoa_hoc.as_str())),
        )
    }

    fn ensure_instructor_name_free(
        &self,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<(), WorkflowError> {
        let existing = self.instructors.snapshot();
        ensure_unique_name(
            "instructor",
            name,
            exclude_id,
            existing
                .iter()
                .map(|gv| (gv.id.as_str(), gv.ten_giang_vien.as_str())),
        )
    }

    fn ensure_instructor_known(&self, name: &str) -> Result<(), WorkflowError> {
        let known = self
            .instructors
            .snapshot()
            .iter()
            .any(|gv| gv.ten_giang_vien == name);
        if known {
            Ok(())
        } else {
            Err(WorkflowError::ReferentialConstraint(format!(
                "no instructor named {name}"
            )))
        }
    }
}
