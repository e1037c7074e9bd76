use rand::Rng;
use serde_json::{Map, Number, Value};

/// Type of a generated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// Relative odds for each node type.
#[derive(Debug, Clone)]
pub struct NodeOdds {
    pub null: u32,
    pub boolean: u32,
    pub number: u32,
    pub string: u32,
    pub array: u32,
    pub object: u32,
}

impl Default for NodeOdds {
    fn default() -> Self {
        Self {
            null: 1,
            boolean: 2,
            number: 6,
            string: 8,
            array: 2,
            object: 3,
        }
    }
}

impl NodeOdds {
    fn total(&self) -> u32 {
        self.null + self.boolean + self.number + self.string + self.array + self.object
    }

    /// Odds with containers disabled, used once the depth limit is reached.
    fn scalars_only(&self) -> Self {
        Self {
            array: 0,
            object: 0,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomDocumentOptions {
    /// Deepest nesting level at which containers may still appear.
    pub max_depth: usize,
    /// Upper bound on entries per mapping and elements per sequence.
    pub max_fields: usize,
    pub odds: NodeOdds,
}

impl Default for RandomDocumentOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_fields: 5,
            odds: NodeOdds::default(),
        }
    }
}

/// Random document generator.
pub struct RandomDocument;

impl RandomDocument {
    /// Generate a non-empty root mapping.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, opts: &RandomDocumentOptions) -> Map<String, Value> {
        let max_fields = opts.max_fields.max(1);
        let count = rng.gen_range(1..=max_fields);
        Self::gen_object(rng, opts, 0, count)
    }

    /// Generate a scalar, or a short sequence of scalars.
    pub fn gen_leaf<R: Rng + ?Sized>(rng: &mut R) -> Value {
        let odds = NodeOdds::default().scalars_only();
        if rng.gen_bool(0.2) {
            let len = rng.gen_range(0..=3);
            return Value::Array((0..len).map(|_| Self::gen_node(rng, &odds)).collect());
        }
        Self::gen_node(rng, &odds)
    }

    /// Generate a mapping key: 1-8 chars of `[a-z0-9_]`, starting with a letter.
    ///
    /// Keys never contain `.`, so they are always addressable as one path token.
    pub fn gen_key<R: Rng + ?Sized>(rng: &mut R) -> String {
        const FIRST: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
        const REST: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_";
        let len = rng.gen_range(1..=8);
        let mut key = String::with_capacity(len);
        key.push(FIRST[rng.gen_range(0..FIRST.len())] as char);
        for _ in 1..len {
            key.push(REST[rng.gen_range(0..REST.len())] as char);
        }
        key
    }

    pub fn gen_string<R: Rng + ?Sized>(rng: &mut R) -> String {
        let len = rng.gen_range(0..=16);
        (0..len).map(|_| rng.gen_range(32u8..=126) as char).collect()
    }

    pub fn gen_number<R: Rng + ?Sized>(rng: &mut R) -> Value {
        if rng.gen_bool(0.7) {
            Value::Number(rng.gen_range(-1_000_000i64..=1_000_000).into())
        } else {
            Number::from_f64(rng.gen::<f64>() * 1e6)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
    }

    fn gen_object<R: Rng + ?Sized>(
        rng: &mut R,
        opts: &RandomDocumentOptions,
        depth: usize,
        count: usize,
    ) -> Map<String, Value> {
        let mut map = Map::new();
        for _ in 0..count {
            let key = Self::gen_key(rng);
            let value = Self::gen_value(rng, opts, depth + 1);
            map.insert(key, value);
        }
        map
    }

    fn gen_value<R: Rng + ?Sized>(rng: &mut R, opts: &RandomDocumentOptions, depth: usize) -> Value {
        let odds = if depth >= opts.max_depth {
            opts.odds.scalars_only()
        } else {
            opts.odds.clone()
        };
        match Self::pick_node_type(rng, &odds) {
            NodeType::Array => {
                let len = rng.gen_range(0..=opts.max_fields);
                Value::Array((0..len).map(|_| Self::gen_value(rng, opts, depth + 1)).collect())
            }
            NodeType::Object => {
                let count = rng.gen_range(0..=opts.max_fields);
                Value::Object(Self::gen_object(rng, opts, depth, count))
            }
            scalar => Self::gen_scalar(rng, scalar),
        }
    }

    fn gen_node<R: Rng + ?Sized>(rng: &mut R, odds: &NodeOdds) -> Value {
        let node_type = Self::pick_node_type(rng, odds);
        Self::gen_scalar(rng, node_type)
    }

    fn gen_scalar<R: Rng + ?Sized>(rng: &mut R, node_type: NodeType) -> Value {
        match node_type {
            NodeType::Boolean => Value::Bool(rng.gen_bool(0.5)),
            NodeType::Number => Self::gen_number(rng),
            NodeType::String => Value::String(Self::gen_string(rng)),
            NodeType::Null | NodeType::Array | NodeType::Object => Value::Null,
        }
    }

    fn pick_node_type<R: Rng + ?Sized>(rng: &mut R, odds: &NodeOdds) -> NodeType {
        let total = odds.total();
        if total == 0 {
            return NodeType::Null;
        }
        let mut roll = rng.gen_range(0..total);
        let table = [
            (odds.null, NodeType::Null),
            (odds.boolean, NodeType::Boolean),
            (odds.number, NodeType::Number),
            (odds.string, NodeType::String),
            (odds.array, NodeType::Array),
            (odds.object, NodeType::Object),
        ];
        for (weight, node_type) in table {
            if roll < weight {
                return node_type;
            }
            roll -= weight;
        }
        NodeType::Null
    }
}

/// Deepest nesting level of a value; scalars are at depth 0.
pub fn depth(value: &Value) -> usize {
    match value {
        Value::Array(arr) => 1 + arr.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}
