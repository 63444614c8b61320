/// File categorization for directory reorganization.
///
/// This module maps file extensions and sniffed MIME labels to broad
/// categories (Images, Documents, Videos, ...). The extension table is the
/// default classification rule; MIME mapping is used by the classifier to
/// override it when the file's content disagrees with its name.
///
/// # Examples
///
/// ```
/// use declutter::file_category::{Category, FileMapper};
///
/// let mapper = FileMapper::default();
/// assert_eq!(mapper.extension_to_category("jpg"), Some(Category::Images));
/// assert_eq!(Category::from_mime("audio/mpeg"), Some(Category::Audio));
/// ```
use std::collections::HashMap;

/// A semantic file category, also the name of its target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, HEIC, ...)
    Images,
    /// Documents, spreadsheets and presentations (PDF, DOCX, XLSX, ...)
    Documents,
    /// Video files (MP4, MKV, ...)
    Videos,
    /// Audio files (MP3, FLAC, ...)
    Audio,
    /// Archive files (ZIP, TAR, ...)
    Archives,
    /// Source code and config files (RS, PY, JSON, ...)
    Code,
    /// Executables and installers (EXE, DEB, MSI, ...)
    Applications,
    /// Files with no recognized extension.
    Other,
}

impl Category {
    /// Returns the directory/label name for this category.
    ///
    /// ```
    /// use declutter::file_category::Category;
    ///
    /// assert_eq!(Category::Images.label(), "Images");
    /// assert_eq!(Category::Other.label(), "Other");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Applications => "Applications",
            Category::Other => "Other",
        }
    }

    /// The noun used in human-readable classification reasons.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Category::Images => "Image",
            Category::Documents => "Document",
            Category::Videos => "Video",
            Category::Audio => "Audio",
            Category::Archives => "Archive",
            Category::Code => "Code",
            Category::Applications => "Application",
            Category::Other => "Unknown",
        }
    }

    /// Maps a sniffed MIME label to a category.
    ///
    /// Matching is by prefix and signature fragments, so labels produced by
    /// content sniffing ("image/png", "application/x-msdownload") resolve
    /// without enumerating every concrete type. Returns `None` for labels
    /// that carry no category signal (e.g. "application/octet-stream").
    pub fn from_mime(mime: &str) -> Option<Category> {
        let mime = mime.to_lowercase();
        if mime.starts_with("image/") {
            return Some(Category::Images);
        }
        if mime.starts_with("video/") {
            return Some(Category::Videos);
        }
        if mime.starts_with("audio/") {
            return Some(Category::Audio);
        }
        if mime.starts_with("text/") || mime == "application/pdf" {
            return Some(Category::Documents);
        }
        if mime.contains("word")
            || mime.contains("document")
            || mime.contains("sheet")
            || mime.contains("excel")
            || mime.contains("presentation")
            || mime.contains("powerpoint")
        {
            return Some(Category::Documents);
        }
        if mime.contains("zip") || mime.contains("compressed") {
            return Some(Category::Archives);
        }
        if mime.contains("executable") || mime.starts_with("application/x-") {
            return Some(Category::Applications);
        }
        None
    }
}

/// Maps file extensions to categories.
///
/// The table is populated once at construction and read-only afterwards,
/// keeping the whole rule set auditable in one place. Custom mappings can be
/// added before the mapper is handed to the classifier.
#[derive(Debug, Clone)]
pub struct FileMapper {
    extension_map: HashMap<String, Category>,
}

impl FileMapper {
    /// Creates a new `FileMapper` with the standard extension table.
    pub fn new() -> Self {
        let mut mapper = Self {
            extension_map: HashMap::new(),
        };
        mapper.populate_standard_mappings();
        mapper
    }

    fn populate_standard_mappings(&mut self) {
        const IMAGES: &[&str] = &[
            "jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico", "heic", "raw", "tiff",
        ];
        const DOCUMENTS: &[&str] = &[
            "pdf", "doc", "docx", "txt", "rtf", "odt", "pages", "tex", "md", "csv", "xls", "xlsx",
            "ppt", "pptx", "key",
        ];
        const VIDEOS: &[&str] = &[
            "mp4", "avi", "mov", "mkv", "wmv", "flv", "webm", "m4v", "mpg", "mpeg",
        ];
        const AUDIO: &[&str] = &["mp3", "wav", "flac", "aac", "m4a", "wma", "ogg", "opus"];
        const ARCHIVES: &[&str] = &["zip", "rar", "7z", "tar", "gz", "bz2", "xz", "dmg"];
        const CODE: &[&str] = &[
            "go", "py", "js", "ts", "java", "c", "cpp", "h", "cs", "rb", "php", "swift", "rs",
            "kt", "scala", "sh", "html", "css", "json", "xml", "yaml", "yml", "sql",
        ];
        const APPLICATIONS: &[&str] = &["exe", "app", "deb", "rpm", "apk", "msi"];

        let tables: &[(&[&str], Category)] = &[
            (IMAGES, Category::Images),
            (DOCUMENTS, Category::Documents),
            (VIDEOS, Category::Videos),
            (AUDIO, Category::Audio),
            (ARCHIVES, Category::Archives),
            (CODE, Category::Code),
            (APPLICATIONS, Category::Applications),
        ];

        for (extensions, category) in tables {
            for ext in *extensions {
                self.add_extension_mapping(ext, *category);
            }
        }
    }

    /// Adds a file extension to category mapping.
    pub fn add_extension_mapping(&mut self, ext: &str, category: Category) {
        self.extension_map.insert(ext.to_lowercase(), category);
    }

    /// Maps a file extension (without the dot) to a category.
    ///
    /// ```
    /// use declutter::file_category::{Category, FileMapper};
    ///
    /// let mapper = FileMapper::default();
    /// assert_eq!(mapper.extension_to_category("PDF"), Some(Category::Documents));
    /// assert_eq!(mapper.extension_to_category("xyz"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(&ext.to_lowercase()).copied()
    }

    /// The extension-based category for a file, `Other` if unrecognized.
    ///
    /// This is the base category every other classification rule compares
    /// against; an empty extension always yields `Other`.
    pub fn base_category(&self, ext: &str) -> Category {
        if ext.is_empty() {
            return Category::Other;
        }
        self.extension_to_category(ext).unwrap_or(Category::Other)
    }
}

impl Default for FileMapper {
    fn default() -> Self {
        Self::new()
    }
}
