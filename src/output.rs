use std::path::{Path, PathBuf};

use tokio::{fs, fs::File, io::AsyncWriteExt};

use crate::query::QueryParams;
use crate::{Error, Result};

/// Directory the page files go to. Created once, before the first page.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(Error::filesystem(&root))?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn page_path(&self, params: &QueryParams) -> PathBuf {
        self.root.join(page_file_name(params))
    }

    /// Writes the body as received, replacing a file left by an earlier run with the same query.
    pub async fn write_page(&self, params: &QueryParams, body: &str) -> Result<PathBuf> {
        let path = self.page_path(params);
        let mut file = File::create(&path)
            .await
            .map_err(Error::filesystem(&path))?;
        file.write_all(body.as_bytes())
            .await
            .map_err(Error::filesystem(&path))?;
        file.flush().await.map_err(Error::filesystem(&path))?;
        Ok(path)
    }
}

/// `<q>_pos<pos>_region<region>_cat<cat>_page<start>.json`
pub fn page_file_name(params: &QueryParams) -> String {
    let term = params.q.replace(['/', '\\'], "_");
    format!(
        "{term}_pos{}_region{}_cat{}_page{}.json",
        params.filters.pos, params.filters.region, params.filters.cat, params.start
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{FilterCodes, FilterKind};
    use crate::query::Filters;

    fn params(pos: &str, region: &str, cat: &str, start: u32) -> QueryParams {
        let filters = Filters {
            pos: FilterCodes::parse(FilterKind::Pos, pos).unwrap(),
            region: FilterCodes::parse(FilterKind::Region, region).unwrap(),
            cat: FilterCodes::parse(FilterKind::Category, cat).unwrap(),
        };
        let mut params = QueryParams::new("KEY", "안녕", 100, filters);
        params.start = start;
        params
    }

    #[test]
    fn file_name_layout() {
        assert_eq!(
            page_file_name(&params("0", "0", "0", 1)),
            "안녕_pos0_region0_cat0_page1.json"
        );
        assert_eq!(
            page_file_name(&params("1,5", "9", "0", 12)),
            "안녕_pos1,5_region9_cat0_page12.json"
        );
    }

    #[test]
    fn distinct_tuples_get_distinct_names() {
        let tuples = [
            ("1", "0", "0", 1),
            ("0", "1", "0", 1),
            ("0", "0", "1", 1),
            ("0", "0", "0", 1),
            ("0", "0", "0", 10),
            ("1,2", "0", "0", 1),
            ("12", "0", "0", 1),
        ];
        let mut names: Vec<String> = tuples
            .iter()
            .map(|(p, r, c, s)| page_file_name(&params(p, r, c, *s)))
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), tuples.len());
    }

    #[test]
    fn term_cannot_escape_directory() {
        let mut p = params("0", "0", "0", 1);
        p.q = "../a\\b".into();
        assert_eq!(page_file_name(&p), ".._a_b_pos0_region0_cat0_page1.json");
    }

    #[tokio::test]
    async fn creates_directory_and_overwrites_page() {
        let tmp = tempfile::tempdir().unwrap();
        let out = OutputDir::create(tmp.path().join("result").join("nested"))
            .await
            .unwrap();
        assert!(out.path().is_dir());

        let p = params("0", "0", "0", 3);
        let first = out.write_page(&p, "first").await.unwrap();
        let second = out.write_page(&p, "second").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
    }

    #[tokio::test]
    async fn directory_over_a_file_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("result");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = OutputDir::create(&blocker).await.unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
    }
}
