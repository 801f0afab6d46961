//! Геометрия SVG-графиков: шкалы, деления осей, сектора круговой диаграммы.
//!
//! Всё здесь чистые функции, компоненты только раскладывают результат в `view!`.

use std::f64::consts::{PI, TAU};

/// Линейное отображение значения из домена в пиксели
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Вырожденный домен (min == max) отображается в середину диапазона
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Шаг делений вида {1, 2, 5} x 10^k, дающий примерно `target_ticks` интервалов
pub fn nice_step(span: f64, target_ticks: usize) -> f64 {
    let raw = span / target_ticks.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Ось значений: всегда включает ноль, границы кратны шагу
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

pub fn nice_axis(values: &[f64], target_ticks: usize) -> Axis {
    let mut min = values.iter().copied().fold(0.0, f64::min);
    let mut max = values.iter().copied().fold(0.0, f64::max);
    if (max - min).abs() < f64::EPSILON {
        // только нули или пустой ряд
        min = 0.0;
        max = 1.0;
    }

    let step = nice_step(max - min, target_ticks);
    let lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;
    let count = ((hi - lo) / step).round() as usize;
    let ticks = (0..=count).map(|i| lo + i as f64 * step).collect();

    Axis {
        min: lo,
        max: hi,
        ticks,
    }
}

/// Центр точки `index` из `count` точек, равномерно по отрезку
pub fn point_position(index: usize, count: usize, start: f64, length: f64) -> f64 {
    if count <= 1 {
        return start + length / 2.0;
    }
    start + index as f64 * length / (count - 1) as f64
}

/// Полоса для столбца: (начало, ширина) с отступом 10% с каждой стороны
pub fn band(index: usize, count: usize, start: f64, length: f64) -> (f64, f64) {
    let step = length / count.max(1) as f64;
    (start + index as f64 * step + step * 0.1, step * 0.8)
}

/// Сектор круговой диаграммы. Углы в радианах, 0 смотрит вверх, по часовой стрелке.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

impl PieSlice {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Отрицательные значения дают сектор нулевой ширины
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut angle = 0.0;

    values
        .iter()
        .map(|v| {
            let fraction = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
            let start = angle;
            angle += fraction * TAU;
            PieSlice {
                start,
                end: angle,
                fraction,
            }
        })
        .collect()
}

/// Точка на окружности; ось y в SVG направлена вниз
pub fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path для сектора. Пустая строка для сектора нулевой ширины.
pub fn slice_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    if slice.fraction <= 0.0 {
        return String::new();
    }
    if slice.fraction >= 0.9999 {
        // полный круг одной дугой не рисуется
        let top = cy - r;
        let bottom = cy + r;
        return format!(
            "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z"
        );
    }

    let (x0, y0) = polar(cx, cy, r, slice.start);
    let (x1, y1) = polar(cx, cy, r, slice.end);
    let large_arc = if slice.end - slice.start > PI { 1 } else { 0 };
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Смещение выдвинутого сектора вдоль его биссектрисы
pub fn pull_offset(slice: &PieSlice, distance: f64) -> (f64, f64) {
    polar(0.0, 0.0, distance, slice.mid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale_maps_and_inverts_range() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 20.0));
        assert!(approx(scale.map(0.0), 300.0));
        assert!(approx(scale.map(100.0), 20.0));
        assert!(approx(scale.map(50.0), 160.0));
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert!(approx(scale.map(5.0), 100.0));
    }

    #[test]
    fn test_nice_axis_positive_values() {
        let axis = nice_axis(&[12.0, 95.0, 40.0], 5);
        assert!(approx(axis.min, 0.0));
        assert!(approx(axis.max, 100.0));
        assert_eq!(axis.ticks.len(), 6);
        assert!(approx(axis.ticks[1], 20.0));
    }

    #[test]
    fn test_nice_axis_includes_negative_values() {
        let axis = nice_axis(&[-30.0, 70.0], 5);
        assert!(approx(axis.min, -40.0));
        assert!(approx(axis.max, 80.0));
        assert!(axis.ticks.iter().any(|t| approx(*t, 0.0)));
    }

    #[test]
    fn test_nice_axis_empty_series() {
        let axis = nice_axis(&[], 5);
        assert!(approx(axis.min, 0.0));
        assert!(axis.max > 0.0);
        assert!(axis.ticks.len() >= 2);
    }

    #[test]
    fn test_point_position() {
        assert!(approx(point_position(0, 1, 10.0, 100.0), 60.0));
        assert!(approx(point_position(0, 3, 10.0, 100.0), 10.0));
        assert!(approx(point_position(2, 3, 10.0, 100.0), 110.0));
    }

    #[test]
    fn test_band() {
        let (pos, width) = band(1, 4, 0.0, 400.0);
        assert!(approx(pos, 110.0));
        assert!(approx(width, 80.0));
    }

    #[test]
    fn test_pie_slices_fractions_and_angles() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert!(approx(slices[0].fraction, 0.25));
        assert!(approx(slices[2].fraction, 0.5));
        assert!(approx(slices[1].start, slices[0].end));
        assert!(approx(slices[2].end, TAU));
    }

    #[test]
    fn test_pie_slices_ignore_negative_and_zero_total() {
        let slices = pie_slices(&[3.0, -1.0, 1.0]);
        assert!(approx(slices[0].fraction, 0.75));
        assert!(approx(slices[1].fraction, 0.0));

        let empty = pie_slices(&[0.0, 0.0]);
        assert!(empty.iter().all(|s| s.fraction == 0.0));
    }

    #[test]
    fn test_slice_path_quarter() {
        let slices = pie_slices(&[1.0, 3.0]);
        let path = slice_path(100.0, 100.0, 50.0, &slices[0]);
        assert_eq!(
            path,
            "M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 150.00 100.00 Z"
        );
        // второй сектор больше половины круга
        assert!(slice_path(100.0, 100.0, 50.0, &slices[1]).contains(" 0 1 1 "));
    }

    #[test]
    fn test_slice_path_full_and_empty() {
        let full = pie_slices(&[5.0, 0.0]);
        assert!(full[0].fraction >= 0.9999);
        assert_eq!(slice_path(10.0, 10.0, 5.0, &full[0]).matches(" A ").count(), 2);
        assert!(slice_path(10.0, 10.0, 5.0, &full[1]).is_empty());
    }

    #[test]
    fn test_pull_offset_points_along_bisector() {
        let slice = PieSlice {
            start: 0.0,
            end: PI / 2.0,
            fraction: 0.25,
        };
        let (dx, dy) = pull_offset(&slice, 10.0);
        assert!(approx(dx, 10.0 * (PI / 4.0).sin()));
        assert!(approx(dy, -10.0 * (PI / 4.0).cos()));
    }
}
