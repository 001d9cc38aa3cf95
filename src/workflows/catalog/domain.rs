use serde::{Deserialize, Serialize};

use crate::persistence::Entity;

/// A course. Wire field names keep their original spellings so existing
/// `danhSachKhoaHoc` payloads load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "tenKhoaHoc")]
    pub ten_khoa_hoc: String,
    /// Instructor name, not id. Must match an existing instructor when the
    /// course is written; kept in sync on rename by the catalog service.
    #[serde(rename = "giangVien")]
    pub giang_vien: String,
    #[serde(rename = "soLuongHocVien", default)]
    pub so_luong_hoc_vien: u32,
    #[serde(rename = "moTa", default)]
    pub mo_ta: String,
    #[serde(rename = "trangThai")]
    pub trang_thai: CourseStatus,
}

impl Entity for Course {
    const COLLECTION: &'static str = "khoahoc";
    const STORAGE_KEY: &'static str = "danhSachKhoaHoc";
    const ID_PREFIX: &'static str = "KH";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Course lifecycle status; serialized as the original display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    #[serde(rename = "Đang mở")]
    DangMo,
    #[serde(rename = "Đã kết thúc")]
    DaKetThuc,
    #[serde(rename = "Tạm dừng")]
    TamDung,
}

impl CourseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CourseStatus::DangMo => "Đang mở",
            CourseStatus::DaKetThuc => "Đã kết thúc",
            CourseStatus::TamDung => "Tạm dừng",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDraft {
    #[serde(rename = "tenKhoaHoc")]
    pub ten_khoa_hoc: String,
    #[serde(rename = "giangVien")]
    pub giang_vien: String,
    #[serde(rename = "soLuongHocVien", default)]
    pub so_luong_hoc_vien: u32,
    #[serde(rename = "moTa", default)]
    pub mo_ta: String,
    #[serde(rename = "trangThai")]
    pub trang_thai: CourseStatus,
}

impl CourseDraft {
    pub fn into_course(self) -> Course {
        Course {
            id: String::new(),
            ten_khoa_hoc: self.ten_khoa_hoc,
            giang_vien: self.giang_vien,
            so_luong_hoc_vien: self.so_luong_hoc_vien,
            mo_ta: self.mo_ta,
            trang_thai: self.trang_thai,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "tenGiangVien")]
    pub ten_giang_vien: String,
}

impl Entity for Instructor {
    const COLLECTION: &'static str = "giangvien";
    const STORAGE_KEY: &'static str = "danhSachGiangVien";
    const ID_PREFIX: &'static str = "GV";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorDraft {
    #[serde(rename = "tenGiangVien")]
    pub ten_giang_vien: String,
}

impl InstructorDraft {
    pub fn into_instructor(self) -> Instructor {
        Instructor {
            id: String::new(),
            ten_giang_vien: self.ten_giang_vien,
        }
    }
}
