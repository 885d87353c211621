use chrono::NaiveDate;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const MALE_NAMES: &[&str] = &[
    "Aahan", "Viktor", "Jonas", "Mateo", "Ilya", "Tomas", "Rafael", "Emil",
];
const FEMALE_NAMES: &[&str] = &[
    "Mira", "Sofia", "Ingrid", "Lucia", "Anya", "Elena", "Greta", "Noor",
];

/// Divisions with (mean, std dev) of their salary distribution.
const DIVISIONS: &[(&str, f64, f64)] = &[
    ("I", 4800.0, 600.0),
    ("II", 5200.0, 700.0),
    ("III", 4500.0, 500.0),
    ("IV", 6100.0, 900.0),
];

fn random_birth_date(rng: &mut SimpleRng) -> NaiveDate {
    let year = rng.range(1950, 1999) as i32;
    let month = rng.range(1, 12) as u32;
    // Capped at 28 so every month is valid.
    let day = rng.range(1, 28) as u32;
    NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 is always valid")
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "employees.csv".to_string());
    let rows: usize = 200;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .expect("Failed to create output file");

    writer
        .write_record(["id", "name", "gender", "birth_date", "division", "salary"])
        .expect("Failed to write header");

    for i in 0..rows {
        let id = 28281 + i as u64;
        let male = rng.next_u64() % 2 == 0;
        let (gender, names) = if male {
            ("Male", MALE_NAMES)
        } else {
            ("Female", FEMALE_NAMES)
        };
        let name = names[rng.range(0, names.len() as u64 - 1) as usize];
        let birth_date = random_birth_date(&mut rng);
        let (division, mean, std_dev) = DIVISIONS[rng.range(0, DIVISIONS.len() as u64 - 1) as usize];
        let salary = rng.gauss(mean, std_dev).max(1000.0).round() as i64;

        writer
            .write_record([
                id.to_string(),
                name.to_string(),
                gender.to_string(),
                birth_date.format("%d.%m.%Y").to_string(),
                division.to_string(),
                salary.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush writer");
    println!("Wrote {rows} employees to {output_path}");
}
