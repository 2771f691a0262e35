pub mod de;
pub mod tid;
