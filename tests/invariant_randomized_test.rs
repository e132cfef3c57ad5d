use gdoc2wechat::core::document::{Document, NamedStyle, Paragraph, Row, Table, TextRun};
use gdoc2wechat::{ConvertOptions, DocsToWechat};

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn next_range(&mut self, low: usize, high: usize) -> usize {
        let span = (high - low + 1) as u64;
        low + (self.next_u64() % span) as usize
    }
}

const WORDS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "omega", "kappa"];

fn word(rng: &mut Lcg) -> &'static str {
    WORDS[rng.next_range(0, WORDS.len() - 1)]
}

fn random_paragraph(rng: &mut Lcg) -> Paragraph {
    let mut para = Paragraph::default();
    for i in 0..rng.next_range(1, 4) {
        let text = if i == 0 {
            word(rng).to_string()
        } else {
            format!(" {}", word(rng))
        };
        let mut run = TextRun::new(text);
        if rng.next_bool() {
            run = run.bold();
        }
        para = para.push(run);
    }
    para.push_text("\n")
}

/// Returns the table and its number of data rows.
fn random_table(rng: &mut Lcg) -> (Table, usize) {
    let columns = rng.next_range(1, 4);
    let data_rows = rng.next_range(0, 5);
    let header = Row::from_texts((0..columns).map(|c| format!("h{}", c)));
    let mut table = Table::default().push_row(header);
    for _ in 0..data_rows {
        let cells = (0..columns).map(|c| {
            if c == 0 || rng.next_bool() {
                word(rng).to_string()
            } else {
                String::new()
            }
        });
        let cells: Vec<String> = cells.collect();
        table = table.push_row(Row::from_texts(cells));
    }
    (table, data_rows)
}

fn delays(html: &str) -> Vec<u32> {
    html.split("animation-delay: ")
        .skip(1)
        .map(|rest| {
            let end = rest.find("ms").expect("delay should be in ms");
            rest[..end].parse().expect("delay should be a number")
        })
        .collect()
}

#[test]
fn randomized_documents_keep_rendering_invariants() {
    for seed in 0..64u64 {
        let mut rng = Lcg::new(seed);
        let step = rng.next_range(50, 300) as u32;
        let mut document = Document::default();
        let mut expected_delays = Vec::new();
        let mut stopped = false;

        for _ in 0..rng.next_range(3, 12) {
            match rng.next_range(0, 9) {
                0 | 1 => {
                    let title = format!("TITLE{}", rng.next_u64() % 1000);
                    document = document.push(Paragraph::new(NamedStyle::Title).push_text(title));
                }
                2 | 3 | 4 => {
                    let (table, rows) = random_table(&mut rng);
                    if !stopped {
                        expected_delays.extend((0..rows as u32).map(|r| r * step));
                    }
                    document = document.push(table);
                }
                5 if seed % 3 == 0 => {
                    document = document
                        .push(Paragraph::heading(1, "References\n"))
                        .push(Paragraph::default().push_text("AFTERSTOP\n"));
                    stopped = true;
                }
                _ => document = document.push(random_paragraph(&mut rng)),
            }
        }

        let options = ConvertOptions {
            row_delay_ms: step,
            ..Default::default()
        };
        let converter = DocsToWechat::new(options);
        let markup = converter.extract_markup(&document);
        let html = converter
            .convert(&document)
            .unwrap_or_else(|e| panic!("seed {} failed to convert: {}", seed, e));

        assert!(!markup.contains("TITLE"), "seed {} leaked a title", seed);
        assert!(!html.contains("TITLE"), "seed {} leaked a title", seed);
        assert!(!html.contains("AFTERSTOP"), "seed {} ignored the stop", seed);
        assert!(!html.contains(">References<"), "seed {} kept the stop", seed);
        assert_eq!(delays(&html), expected_delays, "seed {}", seed);
        assert!(html.matches("@keyframes").count() <= 1, "seed {}", seed);
        assert!(!html.contains("<table"), "seed {}", seed);
    }
}
