use anyhow::{anyhow, Context, Result};
use bumpalo::Bump;
use regex::Regex;
use rust_lists::LinkedList;
use std::{env, fs::File, io::Read};

/*
 * Parse one unsigned integer per line.
 * Blank lines are skipped, anything else is rejected naming the bad line.
 */
fn parse_values(input: &str) -> Result<Vec<u32>> {
    let re = Regex::new(r"^\s*(\d+)\s*$")?;
    let mut values = Vec::new();
    for l in input.lines() {
        if l.trim().is_empty() {
            continue;
        }
        let captures = re
            .captures(l)
            .ok_or(anyhow!("Failed to parse line {}", l))?;
        let value: u32 = captures.get(1).unwrap().as_str().parse()?;
        values.push(value);
    }
    Ok(values)
}

/*
 * Print the traversal order and a few derived facts about the list.
 */
fn describe(list: &LinkedList<u32>) {
    println!("List   : {}", list);
    println!("Length : {}", list.len());
    if let (Some(min), Some(max)) = (list.min(), list.max()) {
        println!("Min    : {}", min);
        println!("Max    : {}", max);
    }
    if let Some(middle) = list.middle() {
        println!("Middle : {}", middle);
    }
}

/*
 * The built-in demonstration : five values pushed at the head, so the
 * traversal order is the reverse of the call order, then the whole chain
 * is reversed in place.
 */
fn demo(bump: &Bump) {
    let mut list = LinkedList::new(bump);
    for v in [9u32, 10, 4, 3, 2] {
        list.push_front(v);
    }
    println!("CREATE");
    describe(&list);

    list.reverse();
    println!("REVERSE");
    describe(&list);
}

fn main() -> Result<()> {
    if env::args().len() > 2 {
        println!(
            "Usage : {} [values input file]",
            env::args().next().unwrap()
        );
        std::process::exit(1);
    }

    let bump = Bump::new();
    match env::args().nth(1) {
        None => demo(&bump),
        Some(path) => {
            let mut f = File::open(path).context("Failed to open file")?;
            let mut input = String::new();
            f.read_to_string(&mut input)
                .context("Failed to read file")?;

            let mut list = LinkedList::new(&bump);
            for v in parse_values(&input)? {
                list.push_back(v);
            }
            describe(&list);

            list.reverse();
            println!("REVERSE");
            describe(&list);
        }
    }

    Ok(())
}
