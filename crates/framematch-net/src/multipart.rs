// crates/framematch-net/src/multipart.rs
//
// Streaming multipart/form-data body. Files are not read into memory: the
// body is a chain of small header buffers and open file handles, and its
// total length is known up front so progress can be reported in bytes.

use std::fs::File;
use std::io::{Cursor, Read};

use framematch_core::media_types::{FilePart, MediaKind};
use uuid::Uuid;

use crate::error::TransportError;

pub struct MultipartBody {
    boundary: String,
    reader:   Box<dyn Read + Send>,
    len:      u64,
}

impl std::fmt::Debug for MultipartBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultipartBody")
            .field("boundary", &self.boundary)
            .field("len", &self.len)
            .finish()
    }
}

impl MultipartBody {
    /// One part per `(field_name, file)`, in the order given.
    pub fn from_files(parts: &[(&str, &FilePart)]) -> Result<Self, TransportError> {
        let boundary = format!("----framematch{}", Uuid::new_v4().simple());
        let mut reader: Box<dyn Read + Send> = Box::new(std::io::empty());
        let mut len = 0u64;

        for (field, part) in parts {
            let file = File::open(&part.path).map_err(|source| TransportError::OpenFile {
                path: part.path.clone(),
                source,
            })?;
            let size = file
                .metadata()
                .map_err(|source| TransportError::OpenFile { path: part.path.clone(), source })?
                .len();

            let head = format!(
                "--{boundary}\r\n\
                 Content-Disposition: form-data; name=\"{field}\"; filename=\"{}\"\r\n\
                 Content-Type: {}\r\n\r\n",
                escape_filename(&part.name),
                MediaKind::content_type(&part.path),
            );
            len += head.len() as u64 + size + 2;
            reader = Box::new(
                reader
                    .chain(Cursor::new(head.into_bytes()))
                    .chain(file)
                    .chain(Cursor::new(b"\r\n".to_vec())),
            );
        }

        let tail = format!("--{boundary}--\r\n");
        len += tail.len() as u64;
        reader = Box::new(reader.chain(Cursor::new(tail.into_bytes())));

        Ok(Self { boundary, reader, len })
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Exact number of bytes the reader will produce.
    pub fn content_length(&self) -> u64 {
        self.len
    }

    pub fn into_reader(self) -> Box<dyn Read + Send> {
        self.reader
    }
}

/// Quotes and line breaks would end the header value early.
fn escape_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"'         => '\'',
            '\r' | '\n' => ' ',
            c           => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn part(dir: &Path, name: &str, bytes: &[u8]) -> FilePart {
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        FilePart { path, name: name.into() }
    }

    #[test]
    fn body_has_exactly_image_and_video_parts() {
        let dir = tempfile::tempdir().unwrap();
        let image = part(dir.path(), "face.jpg", b"JPEGDATA");
        let video = part(dir.path(), "clip.mp4", b"MP4DATA-MP4DATA");

        let body = MultipartBody::from_files(&[("image", &image), ("video", &video)]).unwrap();
        let boundary = body.boundary().to_string();
        assert!(body.content_type().ends_with(&boundary));
        let declared = body.content_length();

        let mut out = Vec::new();
        body.into_reader().read_to_end(&mut out).unwrap();
        assert_eq!(out.len() as u64, declared);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(&format!("--{boundary}\r\n")).count(), 2);
        assert!(text.ends_with(&format!("--{boundary}--\r\n")));
        assert!(text.contains("name=\"image\"; filename=\"face.jpg\"\r\nContent-Type: image/jpeg\r\n\r\nJPEGDATA\r\n"));
        assert!(text.contains("name=\"video\"; filename=\"clip.mp4\"\r\nContent-Type: video/mp4\r\n\r\nMP4DATA-MP4DATA\r\n"));
        assert!(text.find("name=\"image\"").unwrap() < text.find("name=\"video\"").unwrap());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let ghost = FilePart { path: dir.path().join("gone.jpg"), name: "gone.jpg".into() };
        let err = MultipartBody::from_files(&[("image", &ghost)]).unwrap_err();
        assert!(matches!(err, TransportError::OpenFile { .. }));
    }

    #[test]
    fn quotes_in_filenames_are_neutralised() {
        assert_eq!(escape_filename("a\"b\r\n.jpg"), "a'b  .jpg");
    }
}
