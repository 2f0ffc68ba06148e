use std::{
    env,
    fs::{self, File},
    io::{Read, Write},
    path::Path,
};

use eyre::Result;

/// Convert a long path to a short path.
///
/// ```no_run
/// use intcode_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/something.txt";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./something.txt");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => match dir.to_str() {
            Some(dir) => path.replace(dir, "."),
            None => path.to_owned(),
        },
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use intcode_common::utils::io::file::write_file;
///
/// let path = "/tmp/outputs.txt";
/// let contents = "43210";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use intcode_common::utils::io::file::read_file;
///
/// let path = "/tmp/program.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let mut file = File::open(Path::new(path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory from the disc. Returns `false` if the path existed and could not
/// be removed.
///
/// ```no_run
/// use intcode_common::utils::io::file::delete_path;
///
/// let path = "/tmp/program.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);
    if path.is_dir() {
        fs::remove_dir_all(path).is_ok()
    } else if path.exists() {
        fs::remove_file(path).is_ok()
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_successful() {
        let path = "/tmp/intcode_common_write/outputs.txt";
        let result = write_file(path, "1,2,3");
        assert!(result.is_ok());
    }

    #[test]
    fn test_read_file_successful() {
        let path = "/tmp/intcode_common_read.txt";
        write_file(path, "1,0,0,0,99").expect("unable to write file");

        let result = read_file(path).expect("unable to read file");
        assert_eq!(result, "1,0,0,0,99");
    }

    #[test]
    fn test_read_file_failure() {
        let path = "/nonexistent/program.txt";
        let result = read_file(path);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_path_successful() {
        let path = "/tmp/intcode_common_delete";
        write_file(&format!("{path}/nested.txt"), "99").expect("unable to write file");

        assert!(delete_path(path));
        assert!(!Path::new(path).exists());
    }

    #[test]
    fn test_delete_path_missing() {
        assert!(delete_path("/nonexistent/intcode_dir"));
    }
}
