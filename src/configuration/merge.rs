use serde_yaml::Value;

// Mappings are merged key by key, every other value of `overlay` replaces the
// one in `base` (sequences and nulls included).
pub fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => {
                        let current = std::mem::replace(existing, Value::Null);
                        *existing = merge(current, value);
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Mapping(base)
        }
        (_, overlay) => overlay,
    }
}

/// Removes every null entry from the mappings in `value` so that the
/// defaulted fields of the target type take their place when deserializing.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, strip_nulls(value)))
                .collect(),
        ),
        Value::Sequence(sequence) => {
            Value::Sequence(sequence.into_iter().map(strip_nulls).collect())
        }
        value => value,
    }
}
