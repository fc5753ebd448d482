use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;

/// Prints every board of a path separated by empty lines or a message if there is no path.
pub struct PathFormatter<'a> {
    path: Option<&'a [Board]>,
}

impl<'a> PathFormatter<'a> {
    pub(crate) fn new(path: Option<&'a [Board]>) -> Self {
        Self { path }
    }
}

impl Display for PathFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No path found"),
            Some(path) => {
                for board in path {
                    writeln!(f, "{}", board)?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for PathFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
