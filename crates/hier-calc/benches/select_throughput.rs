use criterion::{criterion_group, criterion_main, Criterion};
use hier_calc::{CalcOpts, HierarchyCalculator, OracleInput};
use hier_core::{HierarchyTag, LoopOrder, ParameterSet, SelfEnergyTerms};
use hier_table::{ExpansionEntry, ExpansionVariable, Polynomial, PolynomialTable, Symbol, Term};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn diag(value: f64) -> [[f64; 3]; 3] {
    [[value, 0.0, 0.0], [0.0, value, 0.0], [0.0, 0.0, value]]
}

fn spectra(count: usize, seed: u64) -> Vec<ParameterSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let msq: f64 = rng.gen_range(1000.0..4000.0);
            let mst1: f64 = rng.gen_range(800.0..3000.0);
            ParameterSet {
                scale: 2000.0,
                mu: rng.gen_range(200.0..3000.0),
                g3: 1.03,
                vd: 49.6,
                vu: 236.1,
                mq2: diag(msq * msq),
                md2: diag(msq * msq),
                mu2: diag(msq * msq),
                mg: rng.gen_range(800.0..4000.0),
                mw: 76.8,
                mz: 88.4,
                mt: 147.3,
                mb: 2.23,
                ma: 2000.0,
                mst: [mst1, mst1 + rng.gen_range(50.0..1500.0)],
                msb: [msq, msq + 1.0],
                s2t: rng.gen_range(-1.0..1.0),
                s2b: -0.5,
            }
        })
        .collect()
}

fn polynomial(scale: f64) -> Polynomial {
    Polynomial::new(vec![
        Term::constant(16.0 * scale)
            .times(Symbol::Al4p, 1)
            .times(Symbol::Mt, 4)
            .times(Symbol::LmMt, 2),
        Term::constant(-3.0 * scale)
            .times(Symbol::Al4p, 1)
            .times(Symbol::Mt, 4)
            .times(Symbol::Dmsqst, 1)
            .times(Symbol::Msq, -2)
            .subleading_in(ExpansionVariable::Dmsqst),
    ])
}

fn table() -> PolynomialTable {
    let mut table = PolynomialTable::new();
    for tag in HierarchyTag::ALL {
        for order in LoopOrder::ALL {
            let scale = 1.0 + 0.01 * tag.id() as f64;
            let entry = ExpansionEntry {
                tag,
                order,
                s1: polynomial(0.1 * scale),
                s2: polynomial(scale),
                s12: polynomial(0.3 * scale),
            };
            table.insert(entry).unwrap();
        }
    }
    table
}

fn oracle(input: &OracleInput) -> SelfEnergyTerms {
    let ratio = 1745.3 / input.stop1;
    SelfEnergyTerms::new(-300.0 * ratio, 3000.0 * ratio, 900.0 * ratio)
}

fn bench_selection(c: &mut Criterion) {
    let table = table();
    let points = spectra(64, 0x5EED);
    for (name, threads) in [("select_hierarchy_seq", 1), ("select_hierarchy_par4", 4)] {
        let opts = CalcOpts {
            threads,
            ..CalcOpts::default()
        };
        c.bench_function(name, |b| {
            b.iter(|| {
                for params in &points {
                    let calc =
                        HierarchyCalculator::new(params.clone(), &table, &oracle, opts.clone())
                            .unwrap();
                    let _ = calc.select_hierarchy(false);
                }
            });
        });
    }
}

fn bench_calculate_dmh(c: &mut Criterion) {
    let table = table();
    let points = spectra(16, 0xD3);
    c.bench_function("calculate_dmh_top", |b| {
        b.iter(|| {
            for params in &points {
                let calc =
                    HierarchyCalculator::new(params.clone(), &table, &oracle, CalcOpts::default())
                        .unwrap();
                let _ = calc.calculate_dmh(false);
            }
        });
    });
}

criterion_group!(benches, bench_selection, bench_calculate_dmh);
criterion_main!(benches);
