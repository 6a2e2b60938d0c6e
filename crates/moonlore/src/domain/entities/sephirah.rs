//! Sephirah - a department overseer from Lobotomy Corporation

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Sephirah {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub portrait: &'static str,
    pub personality: &'static str,
    pub suppression_guide: &'static str,
    pub quest_reward: &'static str,
    pub connections: Vec<&'static str>,
}
