//! Feeding loosely-typed data through the helpers.
//!
//! Run with: cargo run --example walkthrough

use loosely::{
    capitalize, chunk, default_to, eq, filter, get, get_path, is_empty, map, reduce, to_number,
    to_number_with, to_value, value, NumberOptions, Value,
};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Product {
    name: String,
    price: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Typed data enters through serde
    let products = to_value(&vec![
        Product {
            name: "cabbage".to_string(),
            price: 1,
        },
        Product {
            name: "cucumber".to_string(),
            price: 3,
        },
        Product {
            name: "ground beef".to_string(),
            price: 10,
        },
    ])?;

    let zero = Value::from(0);
    let price = |p: &Value| get(p, "price", &zero).as_i64().unwrap_or(0);

    let cheap = filter(&products, |p, _| price(p) < 5);
    let names = map(&products, |p, _| Value::from(capitalize(get(p, "name", &Value::Undefined))));
    let total = reduce(&products, |sum, p, _| sum + price(p), 0);

    println!("Cheap products: {}", map(&cheap, |p, _| get(p, "name", &Value::Undefined).clone()));
    println!("Capitalized names: {}", names);
    println!("Total price: {}\n", total);

    // Sequences keep their holes through chunk
    let sparse = value!([1, _, 3, _, 5]);
    println!("chunk({}, 2) = {}", sparse, chunk(&sparse, 2));
    println!("chunk({}, \"lots\") = {}\n", sparse, chunk(&sparse, "lots"));

    // Coercion and fallbacks
    for text in ["42", " 1.5e2 ", "0x1f", "", "twelve"] {
        let input = Value::from(text);
        println!("to_number({:?}) = {}", text, to_number(&input));
    }
    let strict = NumberOptions::strict();
    println!("strict to_number(\"0x1f\") = {}\n", to_number_with(&Value::from("0x1f"), &strict));

    let parsed = Value::from(to_number(&Value::from("not a number")));
    println!("default_to(NaN, 0) = {}", default_to(&parsed, &zero));
    println!("eq(NaN, NaN) = {}", eq(&parsed, &parsed));
    println!("is_empty([]) = {}", is_empty(&value!([])));
    println!("is_empty(null) = {}", is_empty(&Value::Null));

    // Dotted and bracketed paths
    let order = value!({ "items": [{ "product": { "name": "cabbage" } }] });
    let fallback = Value::from("unknown");
    println!(
        "items[0].product.name = {}",
        get_path(&order, "items[0].product.name", &fallback)
    );
    println!(
        "items[3].product.name = {}",
        get_path(&order, "items[3].product.name", &fallback)
    );

    Ok(())
}
