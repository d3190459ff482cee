//! Writing fixture files and reading them back.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::catalog::{Product, Review};
use crate::error::FixtureError;
use crate::generator::FixtureSet;

pub const PRODUCTS_FILE: &str = "products.json";
pub const REVIEWS_FILE: &str = "reviews.json";

/// Locations of the two fixture files inside an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    pub products: PathBuf,
    pub reviews: PathBuf,
}

impl FixturePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            products: dir.join(PRODUCTS_FILE),
            reviews: dir.join(REVIEWS_FILE),
        }
    }
}

/// Write `products.json` and `reviews.json` into `dir`, creating it if needed.
///
/// Documents are pretty-printed with two-space indentation. A failure part
/// way through leaves whatever was already written in place.
pub fn write_fixtures(dir: &Path, set: &FixtureSet) -> Result<FixturePaths, FixtureError> {
    fs::create_dir_all(dir).map_err(|source| FixtureError::OutputWrite {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = FixturePaths::in_dir(dir);
    write_json(&paths.products, &set.products)?;
    write_json(&paths.reviews, &set.reviews)?;

    info!(
        dir = %dir.display(),
        products = set.products.len(),
        reviews = set.reviews.len(),
        "wrote fixture files"
    );
    Ok(paths)
}

/// Read both fixture files back from `dir`.
pub fn load_fixtures(dir: &Path) -> Result<FixtureSet, FixtureError> {
    let paths = FixturePaths::in_dir(dir);
    let products: Vec<Product> = read_json(&paths.products)?;
    let reviews: Vec<Review> = read_json(&paths.reviews)?;
    Ok(FixtureSet { products, reviews })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FixtureError> {
    let write_err = |source: std::io::Error| FixtureError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| write_err(std::io::Error::from(e)))?;
    writer.flush().map_err(write_err)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let file = File::open(path).map_err(|source| FixtureError::OutputRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
