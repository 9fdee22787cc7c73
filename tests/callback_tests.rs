mod common;

use common::stub_client;
use paytrail_rest::CallbackParams;
use paytrail_rest::infrastructure::in_memory::StubTransport;

// Uppercase MD5 of "12345|1618300000|1|1|<demo secret>"
const EXPECTED_AUTH_CODE: &str = "D71B77B57B84B38CD475350A6A5FA240";

fn mutate(value: &str, index: usize) -> String {
    value
        .char_indices()
        .map(|(i, c)| match (i == index, c) {
            (false, c) => c,
            (true, '0') => '1',
            (true, _) => '0',
        })
        .collect()
}

#[test]
fn test_valid_callback() {
    let client = stub_client(&StubTransport::new());
    assert_eq!(
        client.callback_auth_code("12345", "1618300000", "1", "1"),
        EXPECTED_AUTH_CODE
    );
    assert!(client.verify_callback("12345", "1618300000", "1", "1", EXPECTED_AUTH_CODE));
}

#[test]
fn test_any_single_character_mutation_fails() {
    let client = stub_client(&StubTransport::new());
    let fields = ["12345", "1618300000", "1", "1", EXPECTED_AUTH_CODE];

    for field in 0..fields.len() {
        for index in 0..fields[field].len() {
            let mut mutated = fields.map(str::to_string);
            mutated[field] = mutate(fields[field], index);
            assert!(
                !client.verify_callback(
                    &mutated[0],
                    &mutated[1],
                    &mutated[2],
                    &mutated[3],
                    &mutated[4]
                ),
                "mutating field {field} at {index} should fail"
            );
        }
    }
}

#[test]
fn test_lowercase_auth_code_fails() {
    let client = stub_client(&StubTransport::new());
    assert!(!client.verify_callback(
        "12345",
        "1618300000",
        "1",
        "1",
        &EXPECTED_AUTH_CODE.to_lowercase()
    ));
}

#[test]
fn test_verify_callback_params() {
    let client = stub_client(&StubTransport::new());
    let params = CallbackParams {
        order_number: "12345".to_string(),
        timestamp: "1618300000".to_string(),
        paid: "1".to_string(),
        method: "1".to_string(),
        auth_code: EXPECTED_AUTH_CODE.to_string(),
    };
    assert!(client.verify_callback_params(&params));

    let forged = CallbackParams {
        paid: "2".to_string(),
        ..params
    };
    assert!(!client.verify_callback_params(&forged));
}
