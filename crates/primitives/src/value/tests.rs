use super::Value;

#[test]
fn numeric_views() {
	assert_eq!(Value::from(3).as_number(), Some(3.0));
	assert_eq!(Value::from(2.5).as_number(), Some(2.5));
	assert_eq!(Value::from("3").as_number(), None);
	assert_eq!(Value::from(3).as_int(), Some(3));
	assert_eq!(Value::from(2.5).as_int(), None);
}

#[test]
fn display() {
	assert_eq!(Value::Nil.to_string(), "nil");
	assert_eq!(Value::from("zzz").to_string(), "\"zzz\"");
	assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
}

#[test]
fn type_names() {
	assert_eq!(Value::default().type_name(), "nil");
	assert_eq!(Value::from(true).type_name(), "bool");
	assert_eq!(Value::from(vec!["a"]).type_name(), "list");
}
