use std::fmt;

const CUSTOMER_ID_PREFIX: &str = "CUS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: String,
    name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Builds the customer with the sequential id `CUS<position>`.
    ///
    /// `position` is 1-based: the first customer on a roster is `CUS1`.
    pub fn numbered(position: usize, name: impl Into<String>) -> Self {
        Self::new(format!("{CUSTOMER_ID_PREFIX}{position}"), name)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
