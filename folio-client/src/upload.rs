use crate::{api::Error, CATEGORIES};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    Image,
    Pdf,
    Video,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> FileKind {
        if mime.contains("video") {
            FileKind::Video
        } else if mime.contains("pdf") {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "pdf",
            FileKind::Video => "video",
        }
    }
}

/// A file the user just picked, before it is part of the draft
#[derive(Clone, Debug, PartialEq)]
pub struct NewFile {
    pub name: String,
    pub mime: String,
    pub size: u64,

    /// Local object URL, only kept for images
    pub preview: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    pub size: String,
    pub preview: Option<String>,
}

pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub tag_input: String,
    pub files: Vec<UploadedFile>,
    pub submitted: bool,
    max_tags: usize,
}

impl UploadDraft {
    pub fn new(max_tags: usize) -> UploadDraft {
        UploadDraft {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
            files: Vec::new(),
            submitted: false,
            max_tags,
        }
    }

    /// Categories a portfolio can be filed under
    pub fn categories() -> impl Iterator<Item = &'static str> {
        CATEGORIES.iter().copied().skip(1)
    }

    /// `stamp` only needs to differ between calls, eg. the current time in ms
    pub fn add_files(&mut self, stamp: i64, files: Vec<NewFile>) {
        self.files
            .extend(files.into_iter().enumerate().map(|(i, f)| {
                let kind = FileKind::from_mime(&f.mime);
                UploadedFile {
                    id: format!("file-{}-{}", stamp, i),
                    name: f.name,
                    kind,
                    size: format_file_size(f.size),
                    preview: match kind {
                        FileKind::Image => f.preview,
                        _ => None,
                    },
                }
            }));
    }

    /// Returns the removed file so its preview URL can be released
    pub fn remove_file(&mut self, id: &str) -> Option<UploadedFile> {
        let idx = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(idx))
    }

    pub fn is_tag_limit_reached(&self) -> bool {
        self.tags.len() >= self.max_tags
    }

    pub fn can_add_tag(&self) -> bool {
        !self.tag_input.trim().is_empty() && !self.is_tag_limit_reached()
    }

    pub fn try_add_tag(&mut self) -> Result<(), Error> {
        let tag = self.tag_input.trim();
        if tag.is_empty() {
            return Err(Error::EmptyContent);
        }
        if self.tags.iter().any(|t| t == tag) {
            return Err(Error::DuplicateTag(String::from(tag)));
        }
        if self.is_tag_limit_reached() {
            return Err(Error::TooManyTags(self.max_tags));
        }
        self.tags.push(String::from(tag));
        self.tag_input.clear();
        Ok(())
    }

    /// Adds the typed tag if it is acceptable, otherwise leaves everything as is
    pub fn add_tag(&mut self) {
        if let Err(e) = self.try_add_tag() {
            tracing::debug!(error = %e, "not adding tag");
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
            && !self.description.is_empty()
            && !self.category.is_empty()
            && !self.files.is_empty()
    }

    pub fn submit(&mut self) {
        if self.can_submit() {
            self.submitted = true;
        }
    }

    /// Back to the form after a submission, with everything filled in kept
    pub fn upload_another(&mut self) {
        self.submitted = false;
    }
}
