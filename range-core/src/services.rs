//! 上游数据服务。线上格式与 JSON 文件一致：
//! `{"min": 1, "max": 100}` 和 `{"rangeValues": [1.99, ...]}`。

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{DataConfig, DataSource};

pub const NORMAL_FILE: &str = "normal.json";
pub const FIXED_FILE: &str = "fixed.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalRangeResponse {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedRangeResponse {
    pub range_values: Vec<f64>,
}

pub trait RangeService {
    fn fetch_normal_range(&self) -> Result<NormalRangeResponse>;
    fn fetch_fixed_range(&self) -> Result<FixedRangeResponse>;
}

/// 内置数据
#[derive(Debug, Clone, Copy, Default)]
pub struct MockService;

impl RangeService for MockService {
    fn fetch_normal_range(&self) -> Result<NormalRangeResponse> {
        Ok(NormalRangeResponse { min: 1.0, max: 100.0 })
    }

    fn fetch_fixed_range(&self) -> Result<FixedRangeResponse> {
        Ok(FixedRangeResponse {
            range_values: vec![1.99, 5.99, 10.99, 30.99, 50.99, 70.99],
        })
    }
}

/// 从目录下的 `normal.json` / `fixed.json` 读取
#[derive(Debug, Clone)]
pub struct JsonFileService {
    dir: PathBuf,
}

impl JsonFileService {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.dir.join(filename);
        log::info!("Fetching range data from {:?}", path);

        let file = File::open(&path)
            .with_context(|| format!("Failed to open {:?}", path))?;
        let data = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed range data in {:?}", path))?;
        Ok(data)
    }

    /// 目录里缺哪个文件就用内置数据补上，已有的文件不动
    pub fn write_defaults(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {:?}", self.dir))?;

        let mock = MockService;
        write_if_missing(&self.dir.join(NORMAL_FILE), &mock.fetch_normal_range()?)?;
        write_if_missing(&self.dir.join(FIXED_FILE), &mock.fetch_fixed_range()?)?;
        Ok(())
    }
}

impl RangeService for JsonFileService {
    fn fetch_normal_range(&self) -> Result<NormalRangeResponse> {
        self.read(NORMAL_FILE).inspect_err(|e| log::error!("Normal range fetch failed: {:#}", e))
    }

    fn fetch_fixed_range(&self) -> Result<FixedRangeResponse> {
        self.read(FIXED_FILE).inspect_err(|e| log::error!("Fixed range fetch failed: {:#}", e))
    }
}

fn write_if_missing<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    log::info!("Wrote default range data to {:?}", path);
    Ok(())
}

pub fn from_config(cfg: &DataConfig) -> Box<dyn RangeService> {
    match cfg.source {
        DataSource::Mock => Box::new(MockService),
        DataSource::Json => Box::new(JsonFileService::new(&cfg.json_dir)),
    }
}
