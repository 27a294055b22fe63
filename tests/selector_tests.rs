use quickgrilla::algorithm::selector::{
    dias_libres, puntaje_balance, puntaje_ventanas, seleccionar_balanceado,
    seleccionar_mas_dias_libres, seleccionar_menos_ventanas, seleccionar_por_profesor,
    sugerir_profesor,
};
use quickgrilla::algorithm::tiempo::parse_bloques;
use quickgrilla::models::{Curso, Horario};

fn curso(nombre: &str, profesor: &str, horario: &str) -> Curso {
    Curso {
        nombre: nombre.to_string(),
        sala: "B-202".to_string(),
        profesor: profesor.to_string(),
        semestre: "2-1".to_string(),
        horario_raw: horario.to_string(),
        bloques: parse_bloques(horario),
    }
}

fn horario(cursos: Vec<Curso>) -> Horario {
    Horario { cursos }
}

#[test]
fn test_mas_dias_libres_elige_el_de_dos_dias() {
    // dos horarios que tocan los 5 días contra uno que toca 2: gana el de 2
    // (3 días libres contra 0)
    let cinco_a = horario(vec![curso("A", "", "['LU1','MA1','MI1','JU1','VI1']")]);
    let cinco_b = horario(vec![curso("A", "", "['LU2','MA2','MI2','JU2','VI2']")]);
    let dos = horario(vec![curso("A", "", "['LU1','MA2']")]);

    let (libres, mejores) = seleccionar_mas_dias_libres(&[cinco_a, dos, cinco_b]);
    assert_eq!(libres, 3);
    assert_eq!(mejores.len(), 1);
    assert_eq!(dias_libres(&mejores[0]), 3);
}

#[test]
fn test_profesor_encuentra_el_unico_horario_con_coincidencia() {
    let h1 = horario(vec![curso("A", "Rojas", "['LU1']")]);
    let h2 = horario(vec![curso("A", "Paula Herrera", "['MA1']")]);
    let hs = vec![h1, h2];

    let elegido = seleccionar_por_profesor(&hs, " herrera ").expect("hay coincidencia");
    assert_eq!(elegido.cursos[0].profesor, "Paula Herrera");
}

#[test]
fn test_profesor_sin_coincidencia_no_revienta() {
    let hs = vec![horario(vec![curso("A", "Rojas", "['LU1']")])];
    assert!(seleccionar_por_profesor(&hs, "Fuentes").is_none());
    // y la sugerencia difusa tampoco inventa nada con una búsqueda absurda
    assert!(sugerir_profesor(&hs, "zzqqy").is_none());
    // pero un error de tipeo cercano sí sugiere
    assert_eq!(sugerir_profesor(&hs, "rojaz"), Some("Rojas".to_string()));
}

#[test]
fn test_balanceado_prefiere_carga_pareja() {
    // {LU:3, MA:1} puntaje 2 contra {LU:2, MA:2} puntaje 0: gana el parejo
    let desparejo = horario(vec![curso("A", "", "['LU1','LU2','LU3','MA1']")]);
    let parejo = horario(vec![curso("A", "", "['LU1','LU2','MA1','MA2']")]);
    assert_eq!(puntaje_balance(&desparejo), 2);
    assert_eq!(puntaje_balance(&parejo), 0);

    let hs = vec![desparejo, parejo];
    let (_, puntaje) = seleccionar_balanceado(&hs).expect("conjunto no vacío");
    assert_eq!(puntaje, 0);
}

#[test]
fn test_menos_ventanas_suma_huecos_por_dia() {
    // LU 1 y 4: dos periodos muertos; JU 2 y 3: cero
    let con_huecos = horario(vec![curso("A", "", "['LU1','LU4','JU2','JU3']")]);
    assert_eq!(puntaje_ventanas(&con_huecos), 2);

    let compacto = horario(vec![curso("A", "", "['LU2','LU3','JU5','JU6']")]);
    assert_eq!(puntaje_ventanas(&compacto), 0);

    let hs = vec![con_huecos, compacto.clone()];
    let (elegido, puntaje) = seleccionar_menos_ventanas(&hs).expect("conjunto no vacío");
    assert_eq!(puntaje, 0);
    assert_eq!(
        elegido.cursos[0].horario_raw,
        compacto.cursos[0].horario_raw
    );
}

#[test]
fn test_empate_se_resuelve_por_orden_de_aparicion() {
    let a = horario(vec![curso("A", "", "['LU1','MA1']")]);
    let b = horario(vec![curso("B", "", "['MI1','JU1']")]);
    let hs = vec![a, b];

    let (elegido, _) = seleccionar_balanceado(&hs).expect("conjunto no vacío");
    assert_eq!(elegido.cursos[0].nombre, "A");
    let (elegido, _) = seleccionar_menos_ventanas(&hs).expect("conjunto no vacío");
    assert_eq!(elegido.cursos[0].nombre, "A");
}

#[test]
fn test_conjunto_de_un_solo_horario() {
    let hs = vec![horario(vec![curso("A", "Soto", "['LU1','MI1']")])];
    let (libres, mejores) = seleccionar_mas_dias_libres(&hs);
    assert_eq!(libres, 3);
    assert_eq!(mejores.len(), 1);
    assert!(seleccionar_balanceado(&hs).is_some());
    assert!(seleccionar_menos_ventanas(&hs).is_some());
}
