use pk_json::{JsonKind, KeeperError, from_json, from_str, to_json, to_string};
use pk_reflect::derive::Reflect;
use pk_reflect::ops::{CoercionError, DynamicObjectList};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[derive(Reflect, Default, Debug, PartialEq, Clone)]
struct Address {
    street: String,
    number: u32,
    coords: Vec<f64>,
}

#[derive(Reflect, Default, Debug, PartialEq, Clone)]
struct Person {
    name: String,
    age: u8,
    email: Option<String>,
    address: Address,
}

#[derive(Reflect, Default, Debug, PartialEq, Clone)]
struct Team {
    title: String,
    scores: Vec<i32>,
    lead: Person,
    members: Vec<Person>,
}

fn person(name: &str, age: u8) -> Person {
    Person {
        name: name.to_owned(),
        age,
        email: None,
        address: Address::default(),
    }
}

fn team() -> Team {
    Team {
        title: "core".to_owned(),
        scores: vec![3, 1, 4],
        lead: Person {
            name: "Ada".to_owned(),
            age: 36,
            email: Some("ada@example.org".to_owned()),
            address: Address {
                street: "Main".to_owned(),
                number: 12,
                coords: vec![51.5, -0.12],
            },
        },
        members: vec![person("Bo", 20), person("Cy", 30), person("Di", 40)],
    }
}

fn json_of<T: pk_reflect::Reflect>(object: &T) -> Value {
    Value::Object(to_json(object).unwrap())
}

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn scalar_round_trip() {
    let source = person("Eve", 42);
    let mut target = Person::default();

    from_json(&mut target, &json_of(&source)).unwrap();
    assert_eq!(target, source);
}

#[derive(Reflect, Default)]
struct Sample {
    value: f64,
    scale: f32,
    offset: Option<f64>,
}

#[test]
fn non_finite_float_round_trip() {
    let source = Sample {
        value: f64::NAN,
        scale: f32::INFINITY,
        offset: Some(f64::NEG_INFINITY),
    };
    let json = json_of(&source);
    assert_eq!(json, json!({"value": null, "scale": null, "offset": null}));

    let mut target = Sample {
        value: 1.0,
        scale: 1.0,
        offset: Some(1.0),
    };
    from_json(&mut target, &json).unwrap();
    assert!(target.value.is_nan());
    assert!(target.scale.is_nan());
    assert_eq!(target.offset, None);
}

#[test]
fn nested_round_trip() {
    let source = team();
    let json = json_of(&source);

    assert_eq!(json["lead"]["address"]["coords"], json!([51.5, -0.12]));

    let mut target = Team {
        members: vec![Person::default(); 3],
        ..Team::default()
    };
    from_json(&mut target, &json).unwrap();
    assert_eq!(target, source);
}

#[test]
fn serialized_shape() {
    let json = json_of(&team());
    assert_eq!(
        json,
        json!({
            "title": "core",
            "scores": [3, 1, 4],
            "lead": {
                "name": "Ada",
                "age": 36,
                "email": "ada@example.org",
                "address": {"street": "Main", "number": 12, "coords": [51.5, -0.12]},
            },
            "members": [
                {"name": "Bo", "age": 20, "email": null, "address": {"street": "", "number": 0, "coords": []}},
                {"name": "Cy", "age": 30, "email": null, "address": {"street": "", "number": 0, "coords": []}},
                {"name": "Di", "age": 40, "email": null, "address": {"street": "", "number": 0, "coords": []}},
            ],
        })
    );
}

#[test]
fn key_order_is_declaration_order() {
    let text = to_string(&person("Fay", 1)).unwrap();
    assert_eq!(
        text,
        r#"{"name":"Fay","age":1,"email":null,"address":{"street":"","number":0,"coords":[]}}"#
    );
}

// -----------------------------------------------------------------------------
// Partial updates

#[test]
fn array_is_replaced() {
    let mut team = team();
    from_json(&mut team, &json!({"scores": [9]})).unwrap();
    assert_eq!(team.scores, [9]);
    assert_eq!(json_of(&team)["scores"], json!([9]));

    let longer = json!([5, 4, 3, 2, 1, 0, -1]);
    from_json(&mut team, &json!({"scores": longer})).unwrap();
    assert_eq!(team.scores, [5, 4, 3, 2, 1, 0, -1]);
    assert_eq!(json_of(&team)["scores"], longer);
}

#[test]
fn missing_keys_keep_values() {
    let mut team = team();
    let expected = Team {
        title: "renamed".to_owned(),
        ..team.clone()
    };

    from_json(&mut team, &json!({"title": "renamed"})).unwrap();
    assert_eq!(team, expected);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut team = team();
    let expected = team.clone();

    from_json(&mut team, &json!({"unknown": {"deep": [1, 2, 3]}, "also": null})).unwrap();
    assert_eq!(team, expected);
}

#[test]
fn nested_partial_update() {
    let mut team = team();
    from_json(&mut team, &json!({"lead": {"address": {"number": 99}}})).unwrap();

    assert_eq!(team.lead.address.number, 99);
    assert_eq!(team.lead.address.street, "Main");
    assert_eq!(team.lead.name, "Ada");
}

#[test]
fn duplicate_json_key_keeps_last_value() {
    let mut person = Person::default();
    from_str(&mut person, r#"{"age": 1, "age": 2}"#).unwrap();
    assert_eq!(person.age, 2);
}

// -----------------------------------------------------------------------------
// Object arrays

#[test]
fn longer_json_array_is_truncated() {
    let mut team = team();
    let json = json!({
        "members": [
            {"name": "a"}, {"name": "b"}, {"name": "c"}, {"name": "d"}, {"name": "e"},
        ],
    });

    from_json(&mut team, &json).unwrap();

    let names: Vec<_> = team.members.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn shorter_json_array_leaves_tail() {
    let mut team = Team {
        members: (0..5).map(|i| person("x", i)).collect(),
        ..Team::default()
    };
    let json = json!({"members": [{"age": 10}, {"age": 11}, {"age": 12}]});

    from_json(&mut team, &json).unwrap();

    let ages: Vec<_> = team.members.iter().map(|p| p.age).collect();
    assert_eq!(ages, [10, 11, 12, 3, 4]);
}

#[derive(Reflect, Default)]
struct Scene {
    name: String,
    nodes: DynamicObjectList,
}

#[test]
fn dynamic_list_round_trip() {
    let mut scene = Scene::default();
    scene.nodes.push(person("Gus", 5));
    scene.nodes.push(Address::default());

    from_json(
        &mut scene,
        &json!({"nodes": [{"age": 6}, {"street": "Side", "coords": [1.0]}]}),
    )
    .unwrap();

    assert_eq!(scene.nodes.downcast_ref::<Person>(0).unwrap().age, 6);
    assert_eq!(
        scene.nodes.downcast_ref::<Address>(1).unwrap().coords,
        [1.0]
    );
    assert_eq!(
        json_of(&scene)["nodes"][1],
        json!({"street": "Side", "number": 0, "coords": [1.0]})
    );
}

#[test]
fn empty_slot_is_an_invalid_reference() {
    let mut scene = Scene::default();
    scene.nodes.push(person("Hal", 1));
    scene.nodes.push_empty();

    let err = to_json(&scene).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::InvalidObjectReference {
            property: "nodes",
            index: 1
        }
    ));

    let err = from_json(&mut scene, &json!({"nodes": [{"age": 2}]})).unwrap_err();
    assert!(matches!(err, KeeperError::InvalidObjectReference { .. }));
    assert_eq!(scene.nodes.downcast_ref::<Person>(0).unwrap().age, 1);
}

// -----------------------------------------------------------------------------
// Failures

#[test]
fn shape_mismatches() {
    let mut team = team();

    let err = from_json(&mut team, &json!([1, 2])).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::JsonObjectExpected {
            found: JsonKind::Array
        }
    ));

    let err = from_json(&mut team, &json!({"lead": 5})).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::JsonObjectExpected {
            found: JsonKind::Number
        }
    ));

    let err = from_json(&mut team, &json!({"scores": {"a": 1}})).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::JsonArrayExpected {
            found: JsonKind::Object
        }
    ));

    let err = from_json(&mut team, &json!({"members": "none"})).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::JsonArrayExpected {
            found: JsonKind::String
        }
    ));

    let err = from_json(&mut team, &json!({"members": [1]})).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::JsonObjectExpected {
            found: JsonKind::Number
        }
    ));

    assert_eq!(team, self::team());
}

#[test]
fn coercion_failure_leaves_array_untouched() {
    let mut team = team();

    let err = from_json(&mut team, &json!({"scores": [1, 2.5, 3]})).unwrap_err();
    match err {
        KeeperError::Coercion {
            property,
            index,
            source,
        } => {
            assert_eq!(property, "scores");
            assert_eq!(index, Some(1));
            assert!(matches!(source, CoercionError::NotRepresentable { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(team.scores, [3, 1, 4]);
}

#[test]
fn nested_failure_propagates_unchanged() {
    let mut team = team();
    let json = json!({
        "title": "changed",
        "lead": {"address": {"number": "twelve"}},
    });

    let err = from_json(&mut team, &json).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::Coercion {
            property: "number",
            index: None,
            source: CoercionError::Mismatch {
                expected: "u32",
                found: "string"
            },
        }
    ));

    // No rollback of writes performed before the failure.
    assert_eq!(team.title, "changed");
}

#[test]
fn null_for_required_scalar() {
    let mut person = person("Ivy", 3);
    let err = from_json(&mut person, &json!({"age": null})).unwrap_err();
    assert!(matches!(
        err,
        KeeperError::Coercion {
            source: CoercionError::UnexpectedNull { .. },
            ..
        }
    ));
    assert_eq!(person.age, 3);
}

#[test]
fn parse_error() {
    let mut person = Person::default();
    let err = from_str(&mut person, "{").unwrap_err();
    assert!(matches!(err, KeeperError::Parse(_)));
}
