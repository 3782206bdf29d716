//! Fixed instance data.

pub(super) const SMALL_POINTS: [i64; 8] = [5, 10, 15, 20, 25, 30, 35, 40];

pub(super) const SMALL_INTERVALS: [(i64, i64); 10] = [
    (0, 12),
    (8, 22),
    (15, 28),
    (25, 42),
    (5, 18),
    (18, 32),
    (30, 45),
    (3, 15),
    (20, 35),
    (12, 26),
];

pub(super) const MEDIUM_POINTS: [i64; 10] = [8, 16, 24, 32, 40, 48, 56, 64, 72, 80];

pub(super) const MEDIUM_INTERVALS: [(i64, i64); 12] = [
    (0, 20),
    (12, 35),
    (25, 45),
    (38, 58),
    (50, 75),
    (65, 85),
    (5, 28),
    (20, 42),
    (35, 55),
    (48, 68),
    (60, 82),
    (15, 38),
];

pub(super) const LARGE_POINTS: [i64; 12] = [5, 12, 18, 25, 32, 38, 45, 52, 58, 65, 72, 80];

pub(super) const LARGE_INTERVALS: [(i64, i64); 15] = [
    (0, 15),
    (10, 28),
    (20, 35),
    (30, 48),
    (40, 58),
    (50, 68),
    (60, 85),
    (5, 20),
    (15, 32),
    (25, 42),
    (35, 52),
    (45, 62),
    (55, 75),
    (70, 85),
    (8, 26),
];
