//! [`Show`] for `serde_json::Value`.
//!
//! Lets a deserialized payload drop straight into show-style output:
//! arrays render as bracketed lists, objects as bracketed key/value pair
//! lists, and strings pass through unquoted like any other raw text.
//!
//! ```rust
//! use showkit::show;
//!
//! let value = serde_json::json!({"name": "Alice", "scores": [1, 2, 3]});
//! assert_eq!(show(&value), "[(name, Alice), (scores, [1, 2, 3])]");
//! ```

use serde_json::Value;

use crate::container::render_default;
use crate::show::Show;

impl Show for Value {
    fn show(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) => render_default(items),
            Value::Object(map) => render_default(map.iter()),
        }
    }
}
