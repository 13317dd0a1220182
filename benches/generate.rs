/*
generate.rs

Copyright 2025 Hervé Quatremain

This file is part of Find the Path.

Find the Path is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Find the Path is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Find the Path. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use find_the_path::generator::lehmer::Lehmer;
use find_the_path::generator::random_path::RandomPath;

fn generate_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (columns, rows) in [(5, 10), (8, 12), (10, 12)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{columns}x{rows}")),
            &(columns, rows),
            |b, &(columns, rows)| {
                let mut seed: u64 = 0;
                b.iter(|| {
                    seed += 1;
                    let mut rng = Lehmer::for_game(seed);
                    black_box(RandomPath::new(columns, rows).generate(&mut rng))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, generate_tiers);
criterion_main!(benches);
