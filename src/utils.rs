/// signed determinant of a 3x3 matrix, expanded along the first row
pub fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    let minor00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
    let minor01 = m[1][0] * m[2][2] - m[1][2] * m[2][0];
    let minor02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];
    m[0][0] * minor00 - m[0][1] * minor01 + m[0][2] * minor02
}
