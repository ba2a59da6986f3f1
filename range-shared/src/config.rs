//! 全局配置表。进程启动时 `init` 一次，之后各模块按节名 (`[system]`, `[widget]` ...)
//! 取出自己的结构体，缺省或类型不符时退回 `Default`。

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    GLOBAL_CONFIG.set(RwLock::new(parse(&content)))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

/// 语法错误不致命：记一条错误日志，返回空表
pub fn parse(content: &str) -> Table {
    toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    })
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// 从全局表读取一节。未初始化时同样返回默认值
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::debug!("Config not initialized, '[{}]' falls back to defaults.", key);
        return T::default();
    };
    match store.read() {
        Ok(table) => get_from(&table, key),
        Err(poisoned) => get_from(&poisoned.into_inner(), key),
    }
}

pub fn get_from<T: DeserializeOwned + Default>(table: &Table, key: &str) -> T {
    match table.get(key) {
        Some(value) => value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        }),
        None => T::default(),
    }
}
