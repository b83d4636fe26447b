/// Filesystem helpers shared by the processor.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Ensure a directory exists, creating it and any missing parents.
    ///
    /// `create_dir_all` tolerates concurrent creators and an existing directory,
    /// but still fails when `path` names something that is not a directory.
    pub fn ensure_dir(path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
