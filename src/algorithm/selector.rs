// Heurísticas de selección sobre el conjunto de horarios generados.
use std::collections::{BTreeSet, HashMap, HashSet};

use strsim::jaro_winkler;

use crate::models::{Dia, Horario};

/// Días de la semana hábil.
const DIAS_SEMANA: u8 = 5;

/// Umbral de similitud Jaro-Winkler para sugerir un profesor parecido.
const UMBRAL_SUGERENCIA: f64 = 0.75;

/// Cantidad de días sin ningún bloque asignado en el horario.
pub fn dias_libres(horario: &Horario) -> u8 {
    let mut ocupados: HashSet<Dia> = HashSet::new();
    for curso in horario.cursos.iter() {
        for b in curso.bloques.iter() {
            ocupados.insert(b.dia);
        }
    }
    DIAS_SEMANA - ocupados.len() as u8
}

/// Todos los horarios empatados en el máximo de días libres, junto con ese
/// máximo. Los empates se devuelven en orden de aparición.
pub fn seleccionar_mas_dias_libres(horarios: &[Horario]) -> (u8, Vec<Horario>) {
    let mut maximo: Option<u8> = None;
    let mut mejores: Vec<Horario> = Vec::new();

    for h in horarios.iter() {
        let libres = dias_libres(h);
        match maximo {
            None => {
                maximo = Some(libres);
                mejores.push(h.clone());
            }
            Some(m) if libres > m => {
                maximo = Some(libres);
                mejores.clear();
                mejores.push(h.clone());
            }
            Some(m) if libres == m => mejores.push(h.clone()),
            _ => {}
        }
    }

    (maximo.unwrap_or(DIAS_SEMANA), mejores)
}

/// Primer horario que contenga algún curso cuyo campo profesor contenga la
/// subcadena buscada (sin distinguir mayúsculas, con recorte de espacios).
/// None si la búsqueda está en blanco o no hay coincidencia en ningún horario.
pub fn seleccionar_por_profesor<'a>(horarios: &'a [Horario], buscado: &str) -> Option<&'a Horario> {
    let aguja = buscado.trim().to_lowercase();
    if aguja.is_empty() {
        return None;
    }
    horarios.iter().find(|h| {
        h.cursos
            .iter()
            .any(|c| c.profesor.to_lowercase().contains(&aguja))
    })
}

/// Sugerencia difusa para una búsqueda de profesor sin coincidencias: el
/// nombre distinto con mayor similitud Jaro-Winkler, si supera el umbral.
pub fn sugerir_profesor(horarios: &[Horario], buscado: &str) -> Option<String> {
    let aguja = buscado.trim().to_lowercase();
    if aguja.is_empty() {
        return None;
    }

    // BTreeSet para recorrer los nombres en orden estable
    let mut nombres: BTreeSet<String> = BTreeSet::new();
    for h in horarios.iter() {
        for c in h.cursos.iter() {
            let p = c.profesor.trim();
            if !p.is_empty() {
                nombres.insert(p.to_string());
            }
        }
    }

    let mut mejor: Option<(f64, String)> = None;
    for nombre in nombres {
        let sim = jaro_winkler(&aguja, &nombre.to_lowercase());
        if sim < UMBRAL_SUGERENCIA {
            continue;
        }
        let reemplazar = match &mejor {
            None => true,
            Some((s, _)) => sim > *s,
        };
        if reemplazar {
            mejor = Some((sim, nombre));
        }
    }
    mejor.map(|(_, nombre)| nombre)
}

/// Bloques de clase por día, considerando sólo los días con al menos uno.
fn carga_por_dia(horario: &Horario) -> HashMap<Dia, u32> {
    let mut por_dia: HashMap<Dia, u32> = HashMap::new();
    for curso in horario.cursos.iter() {
        for b in curso.bloques.iter() {
            *por_dia.entry(b.dia).or_insert(0) += 1;
        }
    }
    por_dia
}

/// Puntaje de balance: max - min de bloques por día entre los días con al
/// menos una clase. 0 = carga perfectamente pareja.
pub fn puntaje_balance(horario: &Horario) -> u32 {
    let por_dia = carga_por_dia(horario);
    if por_dia.is_empty() {
        return 0;
    }
    let maximo = por_dia.values().copied().max().unwrap_or(0);
    let minimo = por_dia.values().copied().min().unwrap_or(0);
    maximo - minimo
}

/// Horario con la carga diaria más balanceada (menor puntaje). Empates se
/// resuelven por orden de aparición.
pub fn seleccionar_balanceado(horarios: &[Horario]) -> Option<(&Horario, u32)> {
    let mut mejor: Option<(usize, u32)> = None;
    for (i, h) in horarios.iter().enumerate() {
        let p = puntaje_balance(h);
        let reemplazar = match mejor {
            None => true,
            Some((_, mp)) => p < mp,
        };
        if reemplazar {
            mejor = Some((i, p));
        }
    }
    mejor.map(|(i, p)| (&horarios[i], p))
}

/// Suma de ventanas: periodos muertos entre clases consecutivas del mismo
/// día, acumulados sobre todos los días.
pub fn puntaje_ventanas(horario: &Horario) -> u32 {
    let mut por_dia: HashMap<Dia, Vec<u8>> = HashMap::new();
    for curso in horario.cursos.iter() {
        for b in curso.bloques.iter() {
            por_dia.entry(b.dia).or_default().push(b.periodo);
        }
    }

    let mut total = 0u32;
    for periodos in por_dia.values_mut() {
        periodos.sort_unstable();
        periodos.dedup();
        for par in periodos.windows(2) {
            total += (par[1] - par[0] - 1) as u32;
        }
    }
    total
}

/// Horario con menos tiempo muerto entre clases (menor puntaje de ventanas).
/// Empates se resuelven por orden de aparición.
pub fn seleccionar_menos_ventanas(horarios: &[Horario]) -> Option<(&Horario, u32)> {
    let mut mejor: Option<(usize, u32)> = None;
    for (i, h) in horarios.iter().enumerate() {
        let p = puntaje_ventanas(h);
        let reemplazar = match mejor {
            None => true,
            Some((_, mp)) => p < mp,
        };
        if reemplazar {
            mejor = Some((i, p));
        }
    }
    mejor.map(|(i, p)| (&horarios[i], p))
}
