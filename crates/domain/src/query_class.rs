use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum QueryClass {
    #[default]
    IN,
    CH,
    HS,
    ANY,
    Other(Arc<str>),
}

impl QueryClass {
    pub fn as_str(&self) -> &str {
        match self {
            QueryClass::IN => "IN",
            QueryClass::CH => "CH",
            QueryClass::HS => "HS",
            QueryClass::ANY => "ANY",
            QueryClass::Other(name) => name,
        }
    }
}

impl fmt::Display for QueryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.to_ascii_uppercase().as_str() {
            "IN" => QueryClass::IN,
            "CH" => QueryClass::CH,
            "HS" => QueryClass::HS,
            "ANY" => QueryClass::ANY,
            _ => QueryClass::Other(Arc::from(s)),
        };
        Ok(parsed)
    }
}

impl From<&str> for QueryClass {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(qclass) => qclass,
            Err(never) => match never {},
        }
    }
}
