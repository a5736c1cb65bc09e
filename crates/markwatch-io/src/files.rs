//! Browser file metadata to selection candidates.

use dioxus::html::FileData;
use markwatch_core::FileRef;

/// Guess a MIME type from a file name when the browser reports none.
///
/// Drag-and-drop from some file managers leaves `type` empty.
#[must_use]
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map_or("", |(_, ext)| ext);
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "pdf" => "application/pdf",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        _ => "",
    }
}

/// Wrap platform files as selection candidates. Contents are not read.
#[must_use]
pub fn candidates(files: Vec<FileData>) -> Vec<FileRef<FileData>> {
    files
        .into_iter()
        .map(|file| {
            let name = file.name();
            let mime = file
                .content_type()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| guess_mime(&name).to_owned());
            FileRef::new(name, file.size(), mime, file)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_by_extension_case_insensitively() {
        assert_eq!(guess_mime("LOGO.PNG"), "image/png");
        assert!(guess_mime("clients.xlsx").contains("spreadsheet"));
        assert_eq!(guess_mime("notes"), "");
    }
}
