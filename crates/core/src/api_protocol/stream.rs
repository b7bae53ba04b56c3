use super::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The stream profiles a reolink camera offers
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// This is the HD stream
    Main,
    /// This is the SD stream
    Sub,
}

impl StreamKind {
    /// The name the camera uses for this stream
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Main => "main",
            StreamKind::Sub => "sub",
        }
    }
}

impl Display for StreamKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StreamKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(StreamKind::Main),
            "sub" => Ok(StreamKind::Sub),
            other => Err(Error::InvalidStream(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse() {
        assert_eq!("main".parse::<StreamKind>().unwrap(), StreamKind::Main);
        assert_eq!("sub".parse::<StreamKind>().unwrap(), StreamKind::Sub);
        assert_matches!("Main".parse::<StreamKind>(), Err(Error::InvalidStream(_)));
        assert_matches!("".parse::<StreamKind>(), Err(Error::InvalidStream(_)));
    }
}
