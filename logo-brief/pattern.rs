/// Sampling radius of the pattern (31x31 patch)
pub const PATTERN_RADIUS: i32 = 15;

/// Side of the patch the pattern was laid out for
pub const PATTERN_PATCH_SIZE: usize = 31;

/// Largest canonical x of any sampling point. The canonical +x axis points
/// at the intensity centroid, so tests sit on the darker half of the patch.
pub const PATTERN_MAX_X: i8 = 3;

/// 256 point pairs `(x1, y1, x2, y2)`, one per descriptor bit.
///
/// Learned offline by greedy selection over steered, smoothed patches:
/// candidate tests are ordered by how close their mean is to 0.5 and a test is
/// kept only if its correlation with every earlier pick stays below 0.4.
pub const PATTERN: [(i8, i8, i8, i8); 256] = [
    (-5, -10, -2, -2), (-5, -8, -5, 11), (-12, -6, -6, 4), (2, -2, 3, -11),
    (0, -1, -1, -14), (-4, 14, -2, 4), (-1, -8, -1, 6), (-4, 1, -5, 6),
    (-4, 4, -3, -5), (2, 13, 1, -3), (-10, -10, -7, -12), (-1, -7, -1, 1),
    (-8, -2, -6, -6), (-11, 6, -5, 0), (-6, -13, -3, -9), (0, -6, 0, -9),
    (-5, -5, -9, -12), (-9, 4, -7, -8), (2, 5, 3, -12), (-6, 10, -4, 7),
    (-2, -11, -1, -8), (-11, -5, -9, 10), (-12, -4, -9, -10), (3, 9, 3, -7),
    (0, 10, 1, 13), (-9, 11, -6, -10), (3, 11, 3, 6), (3, -9, 2, 1),
    (-5, -4, -8, 11), (-7, 6, -6, 10), (-6, 7, -9, -12), (1, 11, 1, -10),
    (-3, 14, -1, 12), (3, -3, 3, 3), (-7, -4, -4, -1), (-12, 3, -7, 7),
    (0, 8, 0, 4), (0, -15, 1, 8), (-11, 3, -5, -3), (-9, 7, -10, 11),
    (0, -15, 2, 14), (-3, -10, -3, 13), (-10, -9, -5, -7), (-3, 3, -6, -13),
    (-5, 13, -4, 13), (-9, -11, -7, 13), (-10, 5, -6, 4), (-12, 1, -12, -9),
    (1, 3, 1, 4), (-7, -12, -6, -13), (2, -7, 3, -11), (-5, -8, -3, -6),
    (-1, -5, -3, 14), (-9, 10, -4, 3), (-6, 1, -10, -10), (-5, -10, -5, -11),
    (-3, 10, -3, 13), (-9, 11, -9, 12), (-7, 2, -4, 0), (-13, 7, -5, -6),
    (-9, 11, -5, 8), (-2, -10, -2, -13), (-2, 3, -2, 0), (2, 14, 3, 9),
    (-11, -1, -8, 5), (-9, 1, -11, 10), (1, -14, 2, -14), (-1, 7, 0, 11),
    (1, -11, 2, -14), (3, 14, 3, -11), (-5, -13, -2, 9), (-1, 10, -1, -12),
    (0, 3, 0, -14), (-5, -6, -6, 7), (-8, 12, -5, 13), (-7, -13, -4, -12),
    (-3, -14, -1, 14), (-12, -9, -5, 10), (-10, -5, -4, -3), (3, -13, 3, 11),
    (-2, 0, -3, 11), (0, 15, 3, 14), (0, 15, 0, -9), (-14, 1, -7, -6),
    (-9, -6, -12, -9), (2, 6, 3, 7), (-5, -1, -4, 0), (-14, 0, -7, 11),
    (-3, -13, -2, -14), (2, -12, 3, -11), (-11, -3, -14, -5), (-12, 9, -8, 11),
    (-5, 4, -4, 4), (-11, 7, -13, -7), (3, 8, 3, 2), (-1, -3, -1, 8),
    (-12, 1, -13, 6), (-2, 12, 0, 8), (-2, -6, -1, -4), (-7, -5, -5, -7),
    (-11, 3, -14, 4), (-6, -8, -5, -9), (-3, -3, -3, -4), (-5, -3, -4, -3),
    (-2, -14, 0, -14), (-6, 0, -6, 1), (-15, 0, -7, -13), (-13, -2, -15, 0),
    (-9, -9, -12, 9), (-12, 1, -7, 0), (-2, 3, -4, 8), (-11, 0, -4, 2),
    (-6, -1, -5, -2), (-7, 13, -2, -8), (-13, 7, -2, -1), (-3, 6, -2, -12),
    (-10, 9, -8, -6), (-12, 9, -7, 6), (2, -8, 3, -6), (-2, 11, -3, -7),
    (-13, -5, -14, 5), (-8, -4, -8, 1), (-7, 2, -4, -9), (-4, 4, -2, 8),
    (-4, -1, -14, -1), (-11, 3, -14, -3), (-14, -4, -4, -8), (-14, -4, -4, 8),
    (-4, 14, 0, -13), (1, -2, 3, 7), (-12, -6, -8, -5), (-7, -4, -10, 6),
    (-7, 13, -3, -14), (-11, 8, -12, 8), (-4, -10, -2, -10), (1, 10, 2, 10),
    (-7, -4, -4, 9), (-8, -1, -4, 5), (3, -4, 2, -3), (-11, 4, -9, 0),
    (-11, 6, -13, 4), (-9, -2, -11, -5), (-3, 7, -2, 7), (-5, 4, -2, 2),
    (2, -9, 3, -9), (-7, -1, -6, -1), (-13, 6, -11, 8), (-2, 7, -6, -9),
    (-13, 4, -5, -10), (-3, -5, -2, -8), (-6, 10, -6, 2), (-13, 5, -9, 4),
    (-10, 0, -3, -5), (3, -1, 1, 4), (-3, 11, 0, 12), (-8, -7, -6, -3),
    (-14, 3, -5, 14), (-7, 9, -3, -10), (-10, -7, -14, -3), (-1, -1, -10, -9),
    (-14, -5, -2, 1), (-1, -3, 0, -5), (-6, 6, -15, 0), (1, -3, 0, -5),
    (0, 2, -7, 13), (-11, -5, -11, -1), (-3, -8, -1, -11), (-12, -3, -9, -1),
    (-2, 11, 1, -7), (-12, 9, -3, -12), (-9, -9, -12, -8), (-9, -1, -5, -12),
    (-14, 4, -3, 7), (-7, 13, -6, 12), (-2, -12, 2, 11), (-10, -1, -11, 1),
    (-9, -11, -2, 12), (-14, -2, -13, -4), (-4, -14, 2, -9), (-12, -9, -1, -5),
    (1, 5, -4, -14), (-7, -12, -9, -12), (-10, 9, -2, 9), (-10, -11, -1, 4),
    (-1, -10, 2, -8), (-8, 6, -5, -14), (-1, 6, 1, 3), (-9, 8, -10, 3),
    (-6, 11, -11, 10), (-7, 7, -1, -2), (-5, -10, -5, -7), (-8, 2, -9, -1),
    (-9, -6, -4, 13), (-9, 2, -12, 2), (-2, 10, -7, 13), (-9, -12, -7, -9),
    (-3, -5, -2, -5), (-1, 13, 2, 2), (-14, 1, -11, 3), (-6, 0, -2, -1),
    (-8, -12, 0, -7), (-2, -13, -3, -14), (1, -1, 3, -2), (2, -12, -1, 13),
    (1, 12, 0, 14), (-3, 0, -2, -12), (-9, 12, -14, -5), (-1, 8, 1, 7),
    (3, -6, 2, -5), (-12, 9, -12, -1), (-13, -4, -11, -4), (3, 11, -1, 2),
    (-2, 6, 1, 8), (-12, -7, -2, -10), (2, -1, -1, 9), (3, -9, 0, 8),
    (-2, -8, 2, 13), (-2, -6, -10, 9), (-7, 7, -1, 12), (2, -4, 3, -2),
    (3, 6, 0, -8), (-4, 13, -5, -2), (3, -1, 0, 15), (-9, -8, -9, -5),
    (-3, 4, -12, 7), (-5, -10, 0, 11), (-7, 13, 1, -3), (-7, -13, 1, 14),
    (-2, -2, -3, -1), (0, -15, -1, -14), (-8, -5, -3, -14), (-7, 9, -10, 6),
    (3, 14, 2, 13), (3, -4, -2, -14), (-3, -7, -14, 3), (-9, 1, -3, 13),
    (-3, -14, 2, 1), (-1, 3, -4, -3), (-3, 3, 1, -8), (1, 5, 2, 5),
    (0, -6, 1, -6), (-7, 12, -8, 9), (-3, 8, 1, -14), (-8, -6, -1, -8),
    (-4, 11, -11, -3), (-6, 5, -7, 4), (-2, 14, -3, 14), (-8, -10, 0, -14),
    (2, -9, -5, 14), (-14, -1, -2, 12), (-9, -12, -10, 1), (0, -12, -1, -11),
    (-5, 1, 0, 15), (-7, 4, -1, -14), (-7, 5, 0, -6), (-6, 11, 0, -11),
];
