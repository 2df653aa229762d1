use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::board::Board;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Board, Box<dyn Error>> {
        let path = self.as_ref();
        debug!("Loading {}", path.display());
        let level = read_file(path)?;
        Ok(level.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserErr;

    #[test]
    fn loading_levels() {
        let board = "levels/01-one-push.txt".load_level().unwrap();
        assert_eq!(board.to_string(), ".S.\n.B.\n.G.\n");

        let board = Path::new("levels/03-pull-first.txt").load_level().unwrap();
        assert_eq!(board.bananas_left(), 1);
    }

    #[test]
    fn missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }

    #[test]
    fn invalid_level() {
        let err = "levels/invalid/jagged.txt".load_level().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParserErr>(),
            Some(&ParserErr::RowLength {
                row: 1,
                expected: 4,
                found: 3
            })
        );
    }
}
