//! Admin console accounts and roles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Viewer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Viewer => "Viewer",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdminAccount {
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub last_login: &'static str,
}

pub(crate) fn admins() -> Vec<AdminAccount> {
    vec![
        AdminAccount {
            name: "Yoon Sera",
            email: "sera.yoon@sobok.example",
            role: Role::Admin,
            last_login: "Today, 09:12",
        },
        AdminAccount {
            name: "Kang Taeyang",
            email: "taeyang.kang@sobok.example",
            role: Role::Manager,
            last_login: "Yesterday, 18:40",
        },
        AdminAccount {
            name: "Im Nari",
            email: "nari.im@sobok.example",
            role: Role::Manager,
            last_login: "3 days ago",
        },
        AdminAccount {
            name: "Auditor (read-only)",
            email: "audit@sobok.example",
            role: Role::Viewer,
            last_login: "2 weeks ago",
        },
    ]
}
