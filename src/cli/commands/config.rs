use serde_yaml::Value;

use crate::cli::commands::common::{load_indexer_config, GlobalOptions};
use crate::cli::types::ConfigAction;
use crate::utils::error::{BoxResult, IndexerError};

/// Handle the config command
pub fn handle_config_command(options: &GlobalOptions, action: &ConfigAction) -> BoxResult<()> {
    let config = load_indexer_config(options)?;
    let yaml = serde_yaml::to_value(&config)
        .map_err(|e| IndexerError::Serialize(e.to_string()))?;

    match action {
        ConfigAction::Get { key } => match get_nested_value(&yaml, key) {
            Some(v) => print!("{}", to_yaml(v)?),
            None => return Err(IndexerError::Config(format!("Key not found: {}", key)).into()),
        },
        ConfigAction::List {} => print!("{}", to_yaml(&yaml)?),
    }
    Ok(())
}

fn to_yaml(value: &Value) -> BoxResult<String> {
    serde_yaml::to_string(value).map_err(|e| IndexerError::Serialize(e.to_string()).into())
}

fn get_nested_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in key.split('.') {
        match current {
            Value::Mapping(map) => {
                let part_key = Value::String(part.to_string());
                current = map.get(&part_key)?;
            }
            Value::Sequence(items) => {
                current = items.get(part.parse::<usize>().ok()?)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nested_value() {
        let yaml: Value = serde_yaml::from_str("a:\n  b: 1\nlist: [x, y]\n").unwrap();

        assert_eq!(get_nested_value(&yaml, "a.b"), Some(&Value::from(1)));
        assert_eq!(get_nested_value(&yaml, "list.1"), Some(&Value::from("y")));
        assert_eq!(get_nested_value(&yaml, "a.c"), None);
        assert_eq!(get_nested_value(&yaml, "list.x"), None);
    }
}
