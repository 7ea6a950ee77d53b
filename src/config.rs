use std::env;
use std::fmt;
use std::path::PathBuf;

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "MARKETPLACE_DATA_DIR";

/// The four record collections a marketplace serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dataset {
    Products,
    Orders,
    Investments,
    Documents,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Products,
        Dataset::Orders,
        Dataset::Investments,
        Dataset::Documents,
    ];

    /// File name of the dataset inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Products => "products.json",
            Dataset::Orders => "orders.json",
            Dataset::Investments => "investments.json",
            Dataset::Documents => "documents.json",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Products => "products",
            Dataset::Orders => "orders",
            Dataset::Investments => "investments",
            Dataset::Documents => "documents",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data directory used when none is configured explicitly.
///
/// `MARKETPLACE_DATA_DIR` wins if set; otherwise the platform data directory
/// (e.g. `~/.local/share/marketplace-views` on Linux).
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(data) = dirs::data_dir() {
        data.join("marketplace-views")
    } else {
        PathBuf::from(".marketplace-views")
    }
}
