use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use roster::{load_file, Employee, Gender, Roster};

// ---------------------------------------------------------------------------
// Summary – what the report shows, in both text and JSON form
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Summary<'a> {
    total: usize,
    men: usize,
    women: usize,
    average_salary: f64,
    oldest: Option<&'a Employee>,
    youngest: Option<&'a Employee>,
    headcount_by_division: BTreeMap<&'a str, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<Lookup<'a>>,
}

#[derive(Serialize)]
struct Lookup<'a> {
    id: i64,
    employee: Option<&'a Employee>,
}

impl<'a> Summary<'a> {
    fn build(roster: &'a Roster, lookup_id: Option<i64>) -> Self {
        Summary {
            total: roster.len(),
            men: roster.by_gender(Gender::Male).len(),
            women: roster.by_gender(Gender::Female).len(),
            average_salary: roster.average_salary(),
            oldest: roster.oldest(),
            youngest: roster.youngest(),
            headcount_by_division: roster.count_by_division(),
            lookup: lookup_id.map(|id| Lookup {
                id,
                employee: roster.find_by_id(id),
            }),
        }
    }
}

fn print_report(summary: &Summary) {
    println!("Employee statistics");
    println!("  total:          {}", summary.total);
    println!("  men:            {}", summary.men);
    println!("  women:          {}", summary.women);
    println!("  average salary: {:.2}", summary.average_salary);

    println!();
    match summary.oldest {
        Some(e) => println!("Oldest employee:   {e}"),
        None => println!("Oldest employee:   none"),
    }
    match summary.youngest {
        Some(e) => println!("Youngest employee: {e}"),
        None => println!("Youngest employee: none"),
    }

    println!();
    println!("Headcount by division");
    for (division, count) in &summary.headcount_by_division {
        println!("  {division}: {count}");
    }

    if let Some(lookup) = &summary.lookup {
        println!();
        match lookup.employee {
            Some(e) => println!("Employee {}: {e}", lookup.id),
            None => println!("Employee {}: not found", lookup.id),
        }
    }
}

const USAGE: &str = "usage: roster <employees.csv> [id] [--json]";

fn main() -> Result<()> {
    env_logger::init();

    let mut json = false;
    let mut positional: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let Some(path) = positional.first().map(PathBuf::from) else {
        anyhow::bail!("{USAGE}");
    };
    let lookup_id: Option<i64> = positional
        .get(1)
        .map(|raw| {
            raw.parse()
                .with_context(|| format!("invalid id argument: {raw:?}"))
        })
        .transpose()?;

    let employees =
        load_file(&path).with_context(|| format!("loading {}", path.display()))?;
    log::info!("loaded {} records from {}", employees.len(), path.display());

    let roster = Roster::new(employees);
    let summary = Summary::build(&roster, lookup_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&summary);
    }

    Ok(())
}
