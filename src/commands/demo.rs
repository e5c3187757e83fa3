use std::io::{self, Write};

use idcounter::{IdGenerator, Strategy};

use crate::options::DemoOptions;

pub fn demo(options: DemoOptions) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    for &strategy in &[Strategy::Eager, Strategy::Lazy] {
        log::info!("Drawing {} IDs from the {} counter", options.count, strategy);

        print_ids(&mut output, strategy.generator(), options.count)?;
    }

    output.flush()?;

    Ok(())
}

fn print_ids<W: Write>(output: &mut W, generator: &dyn IdGenerator, count: u32) -> io::Result<()> {
    for _ in 0..count {
        writeln!(output, "id: {}", generator.next_id())?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use idcounter::Counter;

    #[test]
    fn one_line_per_id() {
        let counter = Counter::new();
        let mut output = Vec::new();

        print_ids(&mut output, &counter, 3).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "id: 1\nid: 2\nid: 3\n");
    }
}
