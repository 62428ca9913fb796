use eyre::Result;

fn main() -> Result<()> {
    let terms = fibseq::fib(10)?;
    let terms: Vec<String> = terms.iter().map(ToString::to_string).collect();
    println!("[{}]", terms.join(", "));
    Ok(())
}
