//! 平均分计算
//!
//! 校规约定的三级滚算：月 → 学期 → 学年。
//! 月平均的除数按年级段取值，七至九年级为固定除数而非科目数。

/// 月平均分除数
///
/// 一至六年级按实际科目数平均；七、八年级固定除以 14；
/// 九年级固定除以 8.4。年级不在 1..=9 内返回 None，
/// 入库数据已在服务层校验，这里只是把约定写清楚。
pub fn divisor(grade_level: i32, score_count: usize) -> Option<f64> {
    match grade_level {
        1..=6 => Some(score_count as f64),
        7 | 8 => Some(14.0),
        9 => Some(8.4),
        _ => None,
    }
}

/// 月平均分：当月各科分数之和除以年级段除数
///
/// 无任何分数或年级段无效时返回 None。
pub fn monthly_average(scores: &[f64], grade_level: i32) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().sum();
    Some(sum / divisor(grade_level, scores.len())?)
}

/// 学期平均分：(末月平均 + 前几个月平均的均值) / 2
///
/// 入参按月份先后排序。只有一个月时学期平均即该月平均；
/// 无数据时返回 None。
pub fn semester_average(monthly_averages: &[f64]) -> Option<f64> {
    match monthly_averages.split_last() {
        None => None,
        Some((last, [])) => Some(*last),
        Some((last, prior)) => {
            let prior_mean = prior.iter().sum::<f64>() / prior.len() as f64;
            Some((last + prior_mean) / 2.0)
        }
    }
}

/// 学年平均分：已有学期平均的均值
///
/// 两学期都缺数据时返回 None；只有一学期时即该学期平均。
pub fn yearly_average(semester_averages: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = semester_averages.iter().copied().flatten().collect();
    if present.is_empty() {
        return None;
    }
    Some(present.iter().sum::<f64>() / present.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap();
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_divisor_lower_grades_uses_count() {
        assert_eq!(divisor(1, 5), Some(5.0));
        assert_eq!(divisor(6, 12), Some(12.0));
    }

    #[test]
    fn test_divisor_middle_grades_fixed() {
        assert_eq!(divisor(7, 10), Some(14.0));
        assert_eq!(divisor(8, 3), Some(14.0));
        assert_eq!(divisor(9, 10), Some(8.4));
    }

    #[test]
    fn test_divisor_out_of_band_rejected() {
        assert_eq!(divisor(0, 5), None);
        assert_eq!(divisor(10, 5), None);
        assert_eq!(monthly_average(&[90.0], 12), None);
    }

    #[test]
    fn test_monthly_average_lower_grade() {
        // 普通算术平均
        assert_close(monthly_average(&[80.0, 90.0, 70.0], 3), 80.0);
    }

    #[test]
    fn test_monthly_average_grade_seven() {
        // 10 科共 700 分，固定除以 14
        let scores = vec![70.0; 10];
        assert_close(monthly_average(&scores, 7), 50.0);
    }

    #[test]
    fn test_monthly_average_grade_nine() {
        assert_close(monthly_average(&[84.0], 9), 10.0);
    }

    #[test]
    fn test_monthly_average_empty() {
        assert_eq!(monthly_average(&[], 5), None);
        assert_eq!(monthly_average(&[], 9), None);
    }

    #[test]
    fn test_semester_average_multiple_months() {
        // 前几月均值 (80 + 90) / 2 = 85，末月 70 → (70 + 85) / 2 = 77.5
        assert_close(semester_average(&[80.0, 90.0, 70.0]), 77.5);
    }

    #[test]
    fn test_semester_average_two_months() {
        assert_close(semester_average(&[60.0, 80.0]), 70.0);
    }

    #[test]
    fn test_semester_average_single_month() {
        assert_close(semester_average(&[88.0]), 88.0);
    }

    #[test]
    fn test_semester_average_empty() {
        assert_eq!(semester_average(&[]), None);
    }

    #[test]
    fn test_yearly_average_both_semesters() {
        assert_close(yearly_average(&[Some(80.0), Some(90.0)]), 85.0);
    }

    #[test]
    fn test_yearly_average_one_semester_missing() {
        assert_close(yearly_average(&[Some(75.0), None]), 75.0);
    }

    #[test]
    fn test_yearly_average_no_data() {
        assert_eq!(yearly_average(&[None, None]), None);
        assert_eq!(yearly_average(&[]), None);
    }
}
