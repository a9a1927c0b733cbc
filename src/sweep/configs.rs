/// Produce the ordered family of field subsets the sweep evaluates.
///
/// Starting from the full field list, each round explores every
/// single-field removal of the working set, then commits to removing the
/// most skewed field -- the first one whose token mass on either side
/// exceeds a share threshold derived from `field_remove_ratio` -- and
/// recurses on the shrunken set. The result is an overcomplete family that
/// exposes the pair ranking to field perturbations.
///
/// Within a round, the subset without the committed field is emitted
/// first, then the remaining single-field removals in field order.
pub fn generate_configs(
    field_list: &[u32],
    l_token_sums: &[u64],
    r_token_sums: &[u64],
    field_remove_ratio: f64,
    l_table_size: usize,
    r_table_size: usize,
) -> Vec<Vec<u32>> {
    let mut configs = Vec::new();
    let mut current: Vec<u32> = field_list.to_vec();
    configs.push(current.clone());

    while current.len() > 1 {
        let l_total: u64 = current.iter().map(|&f| l_token_sums[f as usize]).sum();
        let r_total: u64 = current.iter().map(|&f| r_token_sums[f as usize]).sum();

        let l_ave = l_total as f64 / l_table_size as f64;
        let r_ave = r_total as f64 / r_table_size as f64;
        let ratio = 1.0
            - (current.len() - 1) as f64 * field_remove_ratio / (1.0 + field_remove_ratio)
                * l_ave.max(r_ave)
                / (l_ave + r_ave);

        // First field dominating either side's token mass; if none does,
        // fall back to the last field.
        let drop = current
            .iter()
            .position(|&f| {
                l_token_sums[f as usize] as f64 > l_total as f64 * ratio
                    || r_token_sums[f as usize] as f64 > r_total as f64 * ratio
            })
            .unwrap_or(current.len() - 1);

        let mut next = current.clone();
        next.remove(drop);
        if !next.is_empty() {
            configs.push(next.clone());
        }

        for i in 0..current.len() {
            if i == drop {
                continue;
            }
            let mut alt = current.clone();
            alt.remove(i);
            if !alt.is_empty() {
                configs.push(alt);
            }
        }

        current = next;
    }

    configs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_yields_one_config() {
        let configs = generate_configs(&[0], &[10], &[10], 0.5, 5, 5);
        assert_eq!(configs, vec![vec![0]]);
    }

    #[test]
    fn uniform_sums_drop_last_field_first() {
        // No field dominates, so each round removes the last field of the
        // working set.
        let configs = generate_configs(&[0, 1, 2], &[10, 10, 10], &[10, 10, 10], 0.5, 10, 10);
        assert_eq!(
            configs,
            vec![
                vec![0, 1, 2],
                vec![0, 1],
                vec![1, 2],
                vec![0, 2],
                vec![0],
                vec![1],
            ]
        );
    }

    #[test]
    fn skewed_field_is_dropped_first() {
        // Field 0 holds nearly all tokens on the left side, so the first
        // round commits to removing it.
        let configs = generate_configs(&[0, 1, 2], &[1000, 10, 10], &[10, 10, 10], 0.5, 10, 10);
        assert_eq!(configs[0], vec![0, 1, 2]);
        assert_eq!(configs[1], vec![1, 2]);
        // The alternates still explore keeping field 0.
        assert!(configs.contains(&vec![0, 2]));
        assert!(configs.contains(&vec![0, 1]));
    }

    #[test]
    fn right_side_skew_also_triggers_removal() {
        let configs = generate_configs(
            &[3, 7],
            &[0, 0, 0, 10, 0, 0, 0, 10],
            &[0, 0, 0, 10, 0, 0, 0, 1000],
            0.5,
            4,
            4,
        );
        assert_eq!(configs[0], vec![3, 7]);
        assert_eq!(configs[1], vec![3]);
        assert_eq!(configs[2], vec![7]);
    }

    #[test]
    fn all_configs_are_nonempty() {
        let configs = generate_configs(&[0, 1, 2, 3], &[5, 6, 7, 8], &[8, 7, 6, 5], 0.3, 3, 3);
        assert!(configs.iter().all(|c| !c.is_empty()));
    }
}
