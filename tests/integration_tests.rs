use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use serde_form::text::MarshalText;
use serde_form::{
    to_node, to_string, to_string_with_options, to_values, to_values_with_options, Error, Field,
    FieldPath, FormFields, Kind, Node, Options,
};
use std::collections::{BTreeMap, HashMap};
use url::Url;

#[derive(Serialize)]
struct Counter {
    #[serde(rename = "N")]
    n: i32,
}

#[derive(Serialize)]
struct OptionalCounter {
    #[serde(rename = "N,omitempty")]
    n: i32,
}

#[derive(Serialize)]
struct Customer {
    id: u32,
    name: String,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct Item {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize)]
struct Order {
    id: u32,
    customer: Customer,
    items: Vec<Item>,
    note: Option<String>,
}

#[test]
fn test_zero_value_elision() {
    let zero = Counter { n: 0 };

    assert_eq!(to_string(&zero).unwrap(), "N=");

    let keep = Options::new().with_zeros(true);
    assert_eq!(to_string_with_options(&zero, &keep).unwrap(), "N=0");

    let optional = OptionalCounter { n: 0 };
    assert_eq!(to_string(&optional).unwrap(), "");
    assert_eq!(to_string_with_options(&optional, &keep).unwrap(), "");

    let optional = OptionalCounter { n: 7 };
    assert_eq!(to_string(&optional).unwrap(), "N=7");
}

#[test]
fn test_omitempty_only_struct_produces_no_pairs() {
    let values = to_values(&OptionalCounter { n: 0 }).unwrap();
    assert!(values.is_empty());
    assert!(!values.contains_key(""));
}

#[test]
fn test_composite_key_composition() {
    #[derive(Serialize)]
    struct Inner {
        #[serde(rename = "B")]
        b: u8,
        #[serde(rename = "C")]
        c: Vec<u32>,
    }

    #[derive(Serialize)]
    struct Outer {
        #[serde(rename = "A")]
        a: Inner,
    }

    let value = Outer {
        a: Inner {
            b: 1,
            c: vec![2, 3],
        },
    };
    let node = to_node(&value, &Options::default()).unwrap();
    assert_eq!(
        node.flatten('.', '\\'),
        vec![
            ("A.B".to_string(), b"1".to_vec()),
            ("A.C.0".to_string(), b"2".to_vec()),
            ("A.C.1".to_string(), b"3".to_vec()),
        ]
    );
    assert_eq!(to_string(&value).unwrap(), "A.B=1&A.C.0=2&A.C.1=3");
}

#[test]
fn test_nested_order() {
    let order = Order {
        id: 12345,
        customer: Customer {
            id: 7,
            name: "Alice".to_string(),
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Item {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Item {
                sku: "GADGET-002".to_string(),
                price: 0.5,
                quantity: 0,
            },
        ],
        note: None,
    };

    let values = to_values(&order).unwrap();
    assert_eq!(values.get("id"), Some("12345"));
    assert_eq!(values.get("customer.tags.0"), Some("vip"));
    assert_eq!(values.get("items.0.price"), Some("29.99"));
    assert_eq!(values.get("items.1.sku"), Some("GADGET-002"));
    assert_eq!(values.get("items.1.quantity"), Some(""));
    assert_eq!(values.get("note"), Some(""));
    assert_eq!(values.len(), 11);
}

#[test]
fn test_byte_sequence_is_one_scalar() {
    #[derive(Serialize)]
    struct Payload {
        data: Vec<u8>,
    }

    let values = to_values(&Payload {
        data: vec![104, 105],
    })
    .unwrap();
    assert_eq!(values.get("data"), Some("hi"));
    assert!(!values.contains_key("data.0"));

    let node = to_node(&vec![104u8, 105], &Options::default()).unwrap();
    assert_eq!(node, Node::from("hi"));
}

#[test]
fn test_invalid_utf8_bytes_are_encoded_bytewise() {
    #[derive(Serialize)]
    struct Payload {
        data: Vec<u8>,
    }

    let payload = Payload {
        data: vec![0xff, 0x41],
    };
    assert_eq!(to_string(&payload).unwrap(), "data=%FFA");

    let values = to_values(&payload).unwrap();
    assert_eq!(values.get_bytes("data"), Some(&[0xff, 0x41][..]));
    assert_eq!(values.get("data"), None);
}

#[test]
fn test_empty_bytes_vanish_when_zeros_are_kept() {
    #[derive(Serialize)]
    struct Payload {
        data: Vec<u8>,
    }

    // An empty byte sequence serializes as an empty sequence, which has no
    // pairs to contribute once zeros are rendered literally.
    let payload = Payload { data: Vec::new() };
    assert_eq!(to_string(&payload).unwrap(), "data=");

    let options = Options::new().with_zeros(true);
    assert_eq!(to_string_with_options(&payload, &options).unwrap(), "");
}

#[test]
fn test_non_utf8_map_key_is_rejected() {
    let mut map = BTreeMap::new();
    map.insert(vec![0xffu8, 0x00], 1);

    let err = to_string(&map).unwrap_err();
    assert!(matches!(err, Error::NonUtf8Key { .. }), "{:?}", err);
}

#[test]
fn test_unsupported_kind_produces_no_output() {
    let mut map = BTreeMap::new();
    map.insert((1, 2), "pair");

    let mut buffer = Vec::new();
    let err = serde_form::to_writer(&mut buffer, &map).unwrap_err();
    match err {
        Error::UnsupportedKind { kind, .. } => assert_eq!(kind, Kind::Tuple),
        other => panic!("Expected unsupported kind, got {:?}", other),
    }
    assert!(buffer.is_empty());
}

#[test]
fn test_map_keys_and_escaping() {
    let mut map = HashMap::new();
    map.insert("a.b".to_string(), "x");
    map.insert("c\\d".to_string(), "y");

    let values = to_values(&map).unwrap();
    assert_eq!(values.get("a\\.b"), Some("x"));
    assert_eq!(values.get("c\\\\d"), Some("y"));

    let mut nested = BTreeMap::new();
    nested.insert(true, BTreeMap::from([('k', 1.5f32)]));
    assert_eq!(to_string(&nested).unwrap(), "true.k=1.5");
}

#[test]
fn test_empty_composites_vanish() {
    #[derive(Serialize)]
    struct Holder {
        list: Vec<String>,
        map: BTreeMap<String, String>,
        name: &'static str,
    }

    let holder = Holder {
        list: Vec::new(),
        map: BTreeMap::new(),
        name: "x",
    };

    // As zero values they collapse to the empty string.
    assert_eq!(to_string(&holder).unwrap(), "list=&map=&name=x");

    // Kept literally, an empty composite has no scalars to emit.
    let keep = Options::new().with_zeros(true);
    assert_eq!(to_string_with_options(&holder, &keep).unwrap(), "name=x");
}

#[test]
fn test_enums() {
    #[derive(Serialize)]
    enum Status {
        Active,
        Suspended { reason: String },
        Weighted(u32),
    }

    #[derive(Serialize)]
    struct Account {
        status: Status,
    }

    let active = Account {
        status: Status::Active,
    };
    assert_eq!(to_string(&active).unwrap(), "status=Active");

    let suspended = Account {
        status: Status::Suspended {
            reason: "fraud".to_string(),
        },
    };
    assert_eq!(
        to_string(&suspended).unwrap(),
        "status.Suspended.reason=fraud"
    );

    let weighted = Account {
        status: Status::Weighted(0),
    };
    assert_eq!(to_string(&weighted).unwrap(), "status.Weighted=");
}

#[test]
fn test_options_and_pointers() {
    #[derive(Serialize)]
    struct Profile {
        nickname: Option<String>,
        age: Option<u8>,
        parent: Option<Box<Profile>>,
    }

    let profile = Profile {
        nickname: Some("ace".to_string()),
        age: Some(0),
        parent: Some(Box::new(Profile {
            nickname: None,
            age: Some(40),
            parent: None,
        })),
    };

    let keep = Options::new().with_zeros(true);
    let values = to_values_with_options(&profile, &keep).unwrap();
    assert_eq!(values.get("nickname"), Some("ace"));
    assert_eq!(values.get("age"), Some("0"));
    assert_eq!(values.get("parent.age"), Some("40"));
    assert_eq!(values.get("parent.nickname"), Some(""));
    assert_eq!(values.get("parent.parent"), Some(""));

    let values = to_values(&profile).unwrap();
    assert_eq!(values.get("age"), Some(""));
}

#[test]
fn test_timestamps() {
    #[derive(Serialize)]
    struct Event {
        #[serde(with = "serde_form::time")]
        at: DateTime<FixedOffset>,
        #[serde(rename = "day,omitempty", with = "serde_form::time")]
        day: NaiveDate,
        #[serde(serialize_with = "serde_form::time::option::serialize")]
        ended: Option<DateTime<Utc>>,
    }

    let tz = FixedOffset::east_opt(7 * 3600).unwrap();
    let event = Event {
        at: tz.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap(),
        day: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        ended: None,
    };

    let values = to_values(&event).unwrap();
    assert_eq!(values.get("at"), Some("2006-01-02T15:04:05+07:00"));
    assert_eq!(values.get("day"), Some("2024-02-29"));
    assert_eq!(values.get("ended"), Some(""));

    let zero = Event {
        at: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(1, 1, 1, 0, 0, 0)
            .unwrap(),
        day: NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
        ended: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
    };

    let values = to_values(&zero).unwrap();
    assert_eq!(values.get("at"), Some(""));
    assert!(!values.contains_key("day"));
    assert_eq!(values.get("ended"), Some("2020-01-01"));

    let keep = Options::new().with_zeros(true);
    let values = to_values_with_options(&zero, &keep).unwrap();
    assert_eq!(values.get("at"), Some("0001-01-01"));
    assert!(!values.contains_key("day"));
}

#[test]
fn test_time_helper_is_plain_string_elsewhere() {
    #[derive(Serialize)]
    struct Event {
        #[serde(serialize_with = "serde_form::time::serialize")]
        at: DateTime<Utc>,
    }

    let event = Event {
        at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"at":"2024-01-15T08:30:00Z"}"#);
}

#[test]
fn test_urls() {
    #[derive(Serialize)]
    struct Link {
        href: Url,
    }

    let link = Link {
        href: Url::parse("https://example.com/a b?q=1").unwrap(),
    };
    let values = to_values(&link).unwrap();
    assert_eq!(values.get("href"), Some("https://example.com/a%20b?q=1"));
    assert_eq!(
        to_string(&link).unwrap(),
        "href=https%3A%2F%2Fexample.com%2Fa%2520b%3Fq%3D1"
    );
}

struct Code(&'static str);

impl MarshalText for Code {
    type Error = String;

    fn marshal_text(&self) -> Result<String, String> {
        if self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(self.0.to_uppercase())
        } else {
            Err(format!("bad code {:?}", self.0))
        }
    }
}

#[derive(Serialize)]
struct Coupon {
    #[serde(serialize_with = "serde_form::text::serialize")]
    code: Code,
}

#[test]
fn test_custom_text() {
    let coupon = Coupon { code: Code("sale") };
    assert_eq!(to_string(&coupon).unwrap(), "code=SALE");
}

#[test]
fn test_custom_text_failure_aborts() {
    let coupons = vec![Coupon { code: Code("ok") }, Coupon { code: Code("no!") }];
    let err = to_string(&coupons).unwrap_err();
    match err {
        Error::Marshal { message, .. } => {
            assert!(message.contains("Code"), "{}", message);
            assert!(message.contains("bad code"), "{}", message);
        }
        other => panic!("Expected marshal error, got {:?}", other),
    }
}

#[test]
fn test_omitted_fields() {
    #[derive(Serialize)]
    struct Session {
        user: String,
        #[serde(rename = "-")]
        token: String,
        #[serde(skip)]
        #[allow(dead_code)]
        cache: u64,
    }

    let session = Session {
        user: "bob".to_string(),
        token: "secret".to_string(),
        cache: 9,
    };
    assert_eq!(to_string(&session).unwrap(), "user=bob");
}

#[test]
fn test_flattened_struct() {
    #[derive(Serialize)]
    struct Audit {
        created: u32,
        by: String,
    }

    #[derive(Serialize)]
    struct Document {
        title: String,
        #[serde(flatten)]
        audit: Audit,
    }

    let doc = Document {
        title: "plan".to_string(),
        audit: Audit {
            created: 0,
            by: "eve".to_string(),
        },
    };
    assert_eq!(to_string(&doc).unwrap(), "by=eve&created=&title=plan");
}

#[test]
fn test_field_resolution() {
    struct Inner;
    impl FormFields for Inner {
        const FIELDS: &'static [Field] = &[Field::new("Foo"), Field::new("Bar")];
    }

    struct Outer;
    impl FormFields for Outer {
        const FIELDS: &'static [Field] = &[
            Field::embedded("Inner", Inner::FIELDS),
            Field::new("Foo"),
            Field::new("Name"),
        ];
    }

    let options = Options::default();
    assert_eq!(
        Outer::find_field("Foo", &options),
        Some(FieldPath::from(vec![1]))
    );
    assert_eq!(
        Outer::find_field("Bar", &options),
        Some(FieldPath::from(vec![0, 1]))
    );
    assert_eq!(Outer::find_field("name", &options), None);

    let caseless = Options::new().with_caseless(true);
    assert_eq!(
        Outer::find_field("name", &caseless),
        Some(FieldPath::from(vec![2]))
    );
}

#[test]
fn test_custom_delimiter_and_escape() {
    let mut map = BTreeMap::new();
    map.insert("x|y", vec!["a", "b"]);

    let options = Options::new().with_delimiter('|').with_escape('^');
    let values = to_values_with_options(&map, &options).unwrap();
    assert_eq!(values.get("x^|y|0"), Some("a"));
    assert_eq!(values.get("x^|y|1"), Some("b"));

    let segments = serde_form::key::split("x^|y|1", '|', '^');
    assert_eq!(segments, vec!["x|y", "1"]);
}

#[test]
fn test_options_from_json() {
    let options: Options = serde_json::from_str(r#"{"delimiter": "/", "zeros": true}"#).unwrap();
    assert_eq!(options.delimiter, '/');
    assert!(options.zeros);
    assert_eq!(options.escape, '\\');
    assert!(options.validate().is_ok());

    let counter = Counter { n: 0 };
    assert_eq!(to_string_with_options(&counter, &options).unwrap(), "N=0");
}

#[test]
fn test_deterministic_ordering() {
    let mut map = HashMap::new();
    for (k, v) in [("b", 2), ("a", 1), ("c", 3), ("aa", 4)] {
        map.insert(k, v);
    }
    for _ in 0..5 {
        assert_eq!(to_string(&map).unwrap(), "a=1&aa=4&b=2&c=3");
    }
}
