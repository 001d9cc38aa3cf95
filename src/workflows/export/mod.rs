//! CSV export of approved members, grouped by club.

use std::io::Write;
use std::string::FromUtf8Error;

use crate::workflows::clubs::Club;
use crate::workflows::registration::{Member, MemberStatus};

/// Fixed column headers, in the locale of the original export.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Câu lạc bộ",
    "Họ tên",
    "Email",
    "SĐT",
    "Giới tính",
    "Địa chỉ",
    "Sở trường",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export was not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Writes the approved members of each club, rows grouped in club directory
/// order, optionally narrowed to one club. Members of deleted clubs do not
/// appear; the export follows the club list, as the original did.
pub fn write_approved_members<W: Write>(
    out: W,
    clubs: &[Club],
    members: &[Member],
    club_filter: Option<&str>,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_HEADERS)?;

    for club in clubs {
        if club_filter.is_some_and(|wanted| wanted != club.id) {
            continue;
        }
        for member in members
            .iter()
            .filter(|member| member.status == MemberStatus::Approved && member.club == club.id)
        {
            writer.write_record([
                club.name.as_str(),
                member.name.as_str(),
                member.email.as_str(),
                member.phone.as_str(),
                gender_label(&member.gender),
                member.address.as_str(),
                member.skills.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Convenience wrapper producing the CSV as a string, for the HTTP export
/// endpoint.
pub fn export_approved_members(
    clubs: &[Club],
    members: &[Member],
    club_filter: Option<&str>,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_approved_members(&mut buffer, clubs, members, club_filter)?;
    Ok(String::from_utf8(buffer)?)
}

fn gender_label(raw: &str) -> &str {
    match raw {
        "male" => "Nam",
        "female" => "Nữ",
        _ => "Khác",
    }
}
