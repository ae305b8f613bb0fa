use anyhow::{Context, Result};
use linkedlist::List;
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod linkedlist;

/*
 * Extract every (optionally signed) decimal integer from the input,
 * in order of appearance, and chain them up. An input with no
 * integers at all yields an empty chain, not an error.
 */
fn parse_list(input: &str) -> Result<List> {
    let re = Regex::new(r"-?\d+")?;
    let mut values = vec![];
    for m in re.find_iter(input) {
        let value: i64 = m
            .as_str()
            .parse()
            .with_context(|| format!("Failed to parse value {}", m.as_str()))?;
        values.push(value);
    }
    Ok(values.into_iter().collect())
}

fn main() -> Result<()> {
    println!("Simple singly-linked list sort poc in rust :D");
    if env::args().len() > 2 {
        println!(
            "Usage : {} [list input file]",
            env::args().next().unwrap()
        );
        process::exit(1);
    }

    let list = match env::args().nth(1) {
        Some(path) => {
            let mut f = File::open(path).context("Failed to open file")?;
            let mut input = String::new();
            f.read_to_string(&mut input)
                .context("Failed to read file")?;
            parse_list(&input).context("Failed to parse list")?
        }
        // Fixed demo chain when no input file is given
        None => [4, 2, 1, 3].into_iter().collect(),
    };

    let sorted = list.sorted();
    println!("Old list: {}", list);
    println!("Sorted list: {}", sorted);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_input_order() {
        let list = parse_list("4 2 1 3").unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![4, 2, 1, 3]);
    }

    #[test]
    fn parse_accepts_mixed_separators() {
        let list = parse_list("5,1\n5\t2").unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![5, 1, 5, 2]);
    }

    #[test]
    fn parse_signed_values() {
        let list = parse_list("-3 0 -12 9").unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![-3, 0, -12, 9]);
    }

    #[test]
    fn parse_without_integers_yields_empty_chain() {
        let list = parse_list("no numbers here").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn parse_rejects_out_of_range_value() {
        assert!(parse_list("99999999999999999999").is_err());
    }

    #[test]
    fn demo_scenario_end_to_end() {
        let list = parse_list("4 2 1 3").unwrap();
        assert_eq!(list.to_string(), "4213");
        assert_eq!(list.sorted().to_string(), "1234");
    }
}
