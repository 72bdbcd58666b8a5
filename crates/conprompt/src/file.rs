//! Line-oriented file helpers.
//!
//! Files are opened, used and closed within a single call. Failures are both
//! shown on the console (with the same wording as the returned error) and
//! returned as a [`FileError`].

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    array::reset_array,
    clock::Clock,
    console::Console,
    error::{FileError, PromptError},
    parse::strip_line_terminator,
};

/// Question asked before overwriting an existing file.
pub const OVERWRITE_QUESTION: &str = "Would you like to overwrite (Y/N)?\n";

impl<R: BufRead, W: Write, C: Clock> Console<R, W, C> {
    /// Read up to `buffer.len()` lines from `path` into `buffer`.
    ///
    /// The buffer is reset to empty strings first, so slots past the end of
    /// the file are blank. Bytes that are not valid UTF-8 are replaced with
    /// `U+FFFD`. Returns the number of lines read.
    ///
    /// A directory counts as a file that cannot be opened. If reading fails
    /// part way, the buffer is reset again before the error is returned.
    pub fn read_file_lines(&mut self, path: impl AsRef<Path>, buffer: &mut [String]) -> Result<usize, FileError> {
        let path = path.as_ref();
        reset_array(buffer);

        let file = match File::open(path).and_then(reject_directory) {
            Ok(file) => file,
            Err(source) => {
                return Err(self.report(FileError::OpenFailed { path: display(path), source }));
            },
        };

        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        let mut count = 0;
        while count < buffer.len() {
            bytes.clear();
            match reader.read_until(b'\n', &mut bytes) {
                Ok(0) => break,
                Ok(_) => {
                    let mut line = String::from_utf8_lossy(&bytes).into_owned();
                    strip_line_terminator(&mut line);
                    buffer[count] = line;
                    count += 1;
                },
                Err(source) => {
                    reset_array(buffer);
                    return Err(self.report(FileError::ReadFailed { path: display(path), source }));
                },
            }
        }

        tracing::debug!(path = %path.display(), count, "read lines");
        Ok(count)
    }

    /// Write each of `lines` to `path`, one per line.
    ///
    /// A new file is created. If the file already exists the user is asked
    /// whether to overwrite it; declining leaves the file untouched and
    /// returns [`FileError::OverwriteDeclined`].
    pub fn write_file_lines<S: AsRef<str>>(&mut self, path: impl AsRef<Path>, lines: &[S]) -> Result<(), FileError> {
        let path = path.as_ref();
        let name = file_name(path);

        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "created file");
                self.print_msg(&format!("File '{name}' created.\n")).map_err(PromptError::Io)?;
                file
            },
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                self.print_msg(&format!("ERR: File '{name}' already exists. "))
                    .map_err(PromptError::Io)?;
                if !self.prompt_yn(OVERWRITE_QUESTION)? {
                    tracing::info!(path = %path.display(), "overwrite declined");
                    return Err(FileError::OverwriteDeclined { name });
                }
                tracing::info!(path = %path.display(), "overwriting file");
                match File::create(path) {
                    Ok(file) => file,
                    Err(source) => {
                        return Err(self.report(FileError::WriteFailed { path: display(path), source }));
                    },
                }
            },
            Err(source) => {
                return Err(self.report(FileError::WriteFailed { path: display(path), source }));
            },
        };

        if let Err(source) = write_lines(file, lines) {
            return Err(self.report(FileError::WriteFailed { path: display(path), source }));
        }

        self.print_msg(&format!("File '{name}' written to.\n\n")).map_err(PromptError::Io)?;
        Ok(())
    }

    /// Show a file failure on the console and hand it back.
    fn report(&mut self, err: FileError) -> FileError {
        tracing::warn!(error = %err, "file operation failed");
        if let Err(e) = self.write_text(&format!("{err}\n")) {
            tracing::warn!("Failed to report file error: {:?}", e);
        }
        err
    }
}

fn reject_directory(file: File) -> io::Result<File> {
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::IsADirectory, "is a directory"));
    }
    Ok(file)
}

fn write_lines<S: AsRef<str>>(file: File, lines: &[S]) -> io::Result<()> {
    let mut out = BufWriter::new(file);
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Final path component, or the whole path if there is none.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| display(path), |name| name.to_string_lossy().into_owned())
}
