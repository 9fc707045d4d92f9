// mock community roster
//
// there is no membership service yet, so the dashboard count and the members
// dialog both come from this list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub handle: &'static str,
    pub location: &'static str,
}

impl Member {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

pub const MEMBERS: [Member; 4] = [
    Member {
        name: "Maya Thompson",
        handle: "@solar_maya",
        location: "Flagstaff, AZ",
    },
    Member {
        name: "Eli Brooks",
        handle: "@rainbarrel_eli",
        location: "Asheville, NC",
    },
    Member {
        name: "Priya Natarajan",
        handle: "@priya_grows",
        location: "Boise, ID",
    },
    Member {
        name: "Sam Okafor",
        handle: "@offgrid_sam",
        location: "Bend, OR",
    },
];

pub const TOTAL_COMMUNITY_MEMBERS: usize = MEMBERS.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_matches_roster() {
        assert_eq!(TOTAL_COMMUNITY_MEMBERS, 4);
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(MEMBERS[0].initials(), "MT");

        let single = Member {
            name: "cher",
            handle: "@cher",
            location: "",
        };
        assert_eq!(single.initials(), "C");
    }
}
