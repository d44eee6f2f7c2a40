use crate::{Group, Team};

/// Reason a team cannot join a group, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GroupFull,
    ConfederationCap,
    AvoidsMember,
    AvoidedByMember,
}

pub fn rejection(group: &Group<'_>, team: &Team) -> Option<Rejection> {
    if group.is_full() {
        return Some(Rejection::GroupFull);
    }

    if group.confederation_count(team.confederation) >= team.confederation.group_cap() {
        return Some(Rejection::ConfederationCap);
    }

    if group.teams.iter().any(|member| team.avoids(member.confederation)) {
        return Some(Rejection::AvoidsMember);
    }

    if group.teams.iter().any(|member| member.avoids(team.confederation)) {
        return Some(Rejection::AvoidedByMember);
    }

    None
}

pub fn admissible(group: &Group<'_>, team: &Team) -> bool {
    rejection(group, team).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Confederation;

    fn team(id: &str, confederation: Confederation) -> Team {
        Team::builder().id(id).confederation(confederation).pot(1).build().unwrap()
    }

    fn placeholder(id: &str, confederation: Confederation, avoid: &[Confederation]) -> Team {
        Team::builder()
            .id(id)
            .confederation(confederation)
            .pot(4)
            .avoid_confederations(avoid.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_group_accepts_anyone() {
        let group = Group::new('A');
        let playoff = placeholder("po", Confederation::Ofc, &[Confederation::Ofc]);

        assert!(admissible(&group, &team("esp", Confederation::Uefa)));
        assert!(admissible(&group, &playoff));
    }

    #[test]
    fn test_uefa_cap_is_two() {
        let esp = team("esp", Confederation::Uefa);
        let cro = team("cro", Confederation::Uefa);
        let nor = team("nor", Confederation::Uefa);

        let mut group = Group::new('A');
        group.push(&esp);
        assert!(admissible(&group, &cro));

        group.push(&cro);
        assert_eq!(rejection(&group, &nor), Some(Rejection::ConfederationCap));
    }

    #[test]
    fn test_other_confederations_cap_is_one() {
        let bra = team("bra", Confederation::Conmebol);
        let col = team("col", Confederation::Conmebol);
        let mar = team("mar", Confederation::Caf);

        let mut group = Group::new('A');
        group.push(&bra);

        assert_eq!(rejection(&group, &col), Some(Rejection::ConfederationCap));
        assert!(admissible(&group, &mar));
    }

    #[test]
    fn test_full_group_rejected_first() {
        let members = [
            team("a", Confederation::Uefa),
            team("b", Confederation::Caf),
            team("c", Confederation::Afc),
            team("d", Confederation::Conmebol),
        ];
        let mut group = Group::new('A');
        for member in &members {
            group.push(member);
        }

        assert_eq!(
            rejection(&group, &team("e", Confederation::Ofc)),
            Some(Rejection::GroupFull)
        );
    }

    #[test]
    fn test_forward_avoidance() {
        let usa = team("usa", Confederation::Concacaf);
        let playoff = placeholder(
            "po_fifa_1",
            Confederation::Ofc,
            &[Confederation::Ofc, Confederation::Concacaf, Confederation::Caf],
        );

        let mut group = Group::new('D');
        group.push(&usa);

        assert_eq!(rejection(&group, &playoff), Some(Rejection::AvoidsMember));
    }

    #[test]
    fn test_backward_avoidance() {
        let playoff = placeholder(
            "po_fifa_2",
            Confederation::Afc,
            &[Confederation::Afc, Confederation::Conmebol, Confederation::Concacaf],
        );
        let ecu = team("ecu", Confederation::Conmebol);
        let esp = team("esp", Confederation::Uefa);

        let mut group = Group::new('F');
        group.push(&playoff);

        assert_eq!(rejection(&group, &ecu), Some(Rejection::AvoidedByMember));
        assert!(admissible(&group, &esp));
    }

    #[test]
    fn test_checker_is_pure() {
        let esp = team("esp", Confederation::Uefa);
        let cro = team("cro", Confederation::Uefa);
        let mut group = Group::new('A');
        group.push(&esp);
        let before = group.clone();

        let first = admissible(&group, &cro);
        let second = admissible(&group, &cro);

        assert_eq!(first, second);
        assert_eq!(group, before);
    }
}
